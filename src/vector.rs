use core::ops::{Index, IndexMut, Neg};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::traits::FloatScalar;

/// Plain 3-component vector `[x, y, z]`.
///
/// Only carries what quaternion rotation needs: dot and cross products
/// and the Euclidean norm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3<T> {
    data: [T; 3],
}

impl<T: FloatScalar> Vector3<T> {
    /// Create a vector from its components.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { data: [x, y, z] }
    }

    /// Create a vector from an array.
    #[inline]
    pub fn from_array(data: [T; 3]) -> Self {
        Self { data }
    }

    /// Zero vector.
    #[inline]
    pub fn zeros() -> Self {
        Self::from_array([T::zero(); 3])
    }

    /// Standard basis vector `e_axis` (0 = x, 1 = y, 2 = z).
    ///
    /// # Panics
    ///
    /// Panics if `axis > 2`.
    #[inline]
    pub fn basis(axis: usize) -> Self {
        let mut v = Self::zeros();
        v[axis] = T::one();
        v
    }

    /// Underlying array.
    #[inline]
    pub fn into_array(self) -> [T; 3] {
        self.data
    }

    #[inline]
    pub fn x(&self) -> T {
        self.data[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.data[1]
    }

    #[inline]
    pub fn z(&self) -> T {
        self.data[2]
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self[0] * rhs[0] + self[1] * rhs[1] + self[2] * rhs[2]
    }

    /// Cross product `self × rhs`.
    #[inline]
    pub fn cross(&self, rhs: &Self) -> Self {
        Self::from_array([
            self[1] * rhs[2] - self[2] * rhs[1],
            self[2] * rhs[0] - self[0] * rhs[2],
            self[0] * rhs[1] - self[1] * rhs[0],
        ])
    }

    /// Squared Euclidean norm.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    /// Euclidean norm.
    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Unit vector in the same direction. A zero vector yields NaN components.
    #[inline]
    pub fn normalize(&self) -> Self {
        let inv = T::one() / self.norm();
        Self::from_array([self[0] * inv, self[1] * inv, self[2] * inv])
    }
}

impl<T> Index<usize> for Vector3<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for Vector3<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T: FloatScalar> Neg for Vector3<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_array([-self[0], -self[1], -self[2]])
    }
}

impl<T: FloatScalar> From<[T; 3]> for Vector3<T> {
    #[inline]
    fn from(data: [T; 3]) -> Self {
        Self::from_array(data)
    }
}

// ── Approximate equality ─────────────────────────────────────────────

impl<T: FloatScalar + AbsDiffEq<Epsilon = T>> AbsDiffEq for Vector3<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        (0..3).all(|i| self[i].abs_diff_eq(&other[i], epsilon))
    }
}

impl<T: FloatScalar + RelativeEq<Epsilon = T>> RelativeEq for Vector3<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        (0..3).all(|i| self[i].relative_eq(&other[i], epsilon, max_relative))
    }
}

impl<T: FloatScalar + UlpsEq<Epsilon = T>> UlpsEq for Vector3<T> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        (0..3).all(|i| self[i].ulps_eq(&other[i], epsilon, max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn from_array_and_index() {
        let v = Vector3::from_array([1.0, 2.0, 3.0]);
        assert_eq!(v[0], 1.0);
        assert_eq!(v.y(), 2.0);
        assert_eq!(v.z(), 3.0);
    }

    #[test]
    fn basis_vectors() {
        assert_eq!(Vector3::<f64>::basis(0), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(Vector3::<f64>::basis(2), Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn dot_product() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(&b), 32.0); // 4 + 10 + 18
    }

    #[test]
    fn cross_product_right_handed() {
        let x = Vector3::<f64>::basis(0);
        let y = Vector3::<f64>::basis(1);
        assert_eq!(x.cross(&y), Vector3::basis(2));
        assert_eq!(y.cross(&x), -Vector3::<f64>::basis(2));
    }

    #[test]
    fn norm_and_normalize() {
        let v = Vector3::new(3.0, 0.0, 4.0);
        assert_eq!(v.norm(), 5.0);
        assert_abs_diff_eq!(v.normalize(), Vector3::new(0.6, 0.0, 0.8), epsilon = 1e-15);
    }
}
