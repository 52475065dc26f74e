//! Quaternion algebra.
//!
//! [`Quaternion`] is a plain value type holding `w + xi + yj + zk` in
//! scalar-first order. No normalization happens implicitly: a quaternion
//! may have any magnitude, including zero. Arithmetic returns new values;
//! [`Quaternion::normalize`] is the one operation that mutates its receiver.
//!
//! ```
//! use hamilton::Quaternion;
//!
//! let p = Quaternion::new(1.0, 0.0, 1.0, 0.0);
//! let q = Quaternion::new(1.0, 1.0, 0.0, 0.0);
//!
//! // The Hamilton product does not commute.
//! assert_eq!(p * q, Quaternion::new(1.0, 1.0, 1.0, -1.0));
//! assert_ne!(q * p, p * q);
//! ```

mod between;
mod euler;


pub use between::ANTIPARALLEL_THRESHOLD;
pub use euler::POLE_THRESHOLD;

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::{One, Zero};

use crate::traits::{constant, FloatScalar};
use crate::vector::Vector3;

/// Squared-magnitude tolerance used by [`Quaternion::normalize`].
pub const DEFAULT_NORMALIZE_TOLERANCE: f64 = 1e-5;

/// Errors from quaternion operations.
///
/// Only returned by the checked variants ([`Quaternion::try_inverse`],
/// [`Quaternion::try_normalize`]). The unchecked variants follow IEEE
/// arithmetic and produce non-finite components instead.
///
/// ```
/// use hamilton::{Quaternion, QuaternionError};
///
/// let zero = Quaternion::<f64>::new(0.0, 0.0, 0.0, 0.0);
/// assert_eq!(zero.try_inverse().unwrap_err(), QuaternionError::DegenerateOperand);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuaternionError {
    /// The operand has zero magnitude, so it cannot be inverted or scaled to unit length.
    DegenerateOperand,
}

impl fmt::Display for QuaternionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateOperand => write!(f, "quaternion has zero magnitude"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QuaternionError {}

/// Quaternion `w + xi + yj + zk`.
///
/// Scalar-first convention: `[w, x, y, z]` where `w` is the real part
/// and `(x, y, z)` the imaginary part.
///
/// `PartialEq` is exact componentwise float comparison. Tolerance-based
/// comparison is available through the [`approx`] traits.
///
/// The type is `Copy` and holds no shared state, so distinct values can
/// be used from any thread. [`normalize`](Self::normalize) needs a unique
/// borrow of its receiver.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Quaternion<T> {
    pub w: T,
    pub x: T,
    pub y: T,
    pub z: T,
}

// ── Constructors ─────────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Create a quaternion from components. No validation or normalization.
    #[inline]
    pub fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { w, x, y, z }
    }

    /// Identity quaternion (no rotation).
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    /// Pure quaternion `(0, v)` representing a 3-vector.
    #[inline]
    pub fn pure(v: Vector3<T>) -> Self {
        Self::new(T::zero(), v[0], v[1], v[2])
    }

    /// Create from an axis (must be unit length) and angle in radians.
    #[inline]
    pub fn from_axis_angle(axis: Vector3<T>, angle: T) -> Self {
        let half = angle / (T::one() + T::one());
        let (s, c) = half.sin_cos();
        Self::new(c, axis[0] * s, axis[1] * s, axis[2] * s)
    }
}

// ── Core operations ──────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Imaginary part `(x, y, z)`.
    #[inline]
    pub fn vector(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Conjugate: `(w, -x, -y, -z)`.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Squared norm: `w² + x² + y² + z²`.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Norm (magnitude).
    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Dot product of two quaternions.
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self.w * rhs.w + self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Scale the receiver to unit length in place and return it for chaining.
    ///
    /// Nothing happens when the squared magnitude is already within
    /// [`DEFAULT_NORMALIZE_TOLERANCE`] of one. The zero quaternion becomes
    /// all-NaN; use [`try_normalize`](Self::try_normalize) to reject it.
    ///
    /// ```
    /// use hamilton::Quaternion;
    ///
    /// let mut q = Quaternion::new(2.0, 2.0, 2.0, 2.0);
    /// assert_eq!(q.normalize().norm(), 1.0);
    /// assert_eq!(q, Quaternion::new(0.5, 0.5, 0.5, 0.5));
    /// ```
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        self.normalize_with_tolerance(constant(DEFAULT_NORMALIZE_TOLERANCE))
    }

    /// [`normalize`](Self::normalize) with an explicit squared-magnitude tolerance.
    pub fn normalize_with_tolerance(&mut self, tolerance: T) -> &mut Self {
        let mag2 = self.norm_squared();
        if (mag2 - T::one()).abs() > tolerance {
            let inv = T::one() / mag2.sqrt();
            self.w = self.w * inv;
            self.x = self.x * inv;
            self.y = self.y * inv;
            self.z = self.z * inv;
        }
        self
    }

    /// Normalize in place, failing without mutation on the zero quaternion.
    pub fn try_normalize(&mut self) -> Result<&mut Self, QuaternionError> {
        if self.is_zero() {
            #[cfg(feature = "log")]
            log::debug!("refusing to normalize the zero quaternion");
            return Err(QuaternionError::DegenerateOperand);
        }
        Ok(self.normalize())
    }

    /// Normalized copy; the receiver is left untouched.
    #[inline]
    pub fn normalized(&self) -> Self {
        let mut q = *self;
        q.normalize();
        q
    }

    /// Inverse: `conjugate / norm²`.
    ///
    /// For unit quaternions this equals the conjugate. The zero quaternion
    /// yields non-finite components; see [`try_inverse`](Self::try_inverse).
    #[inline]
    pub fn inverse(&self) -> Self {
        let n = self.norm_squared();
        Self::new(self.w / n, -self.x / n, -self.y / n, -self.z / n)
    }

    /// Inverse, or [`QuaternionError::DegenerateOperand`] for the zero quaternion.
    pub fn try_inverse(&self) -> Result<Self, QuaternionError> {
        if self.is_zero() {
            #[cfg(feature = "log")]
            log::debug!("refusing to invert the zero quaternion");
            return Err(QuaternionError::DegenerateOperand);
        }
        Ok(self.inverse())
    }

    /// Rotate the vector quaternion `p = (0, x, y, z)` by `self`: `self · p · self⁻¹`.
    ///
    /// Uses the true inverse, so the receiver does not have to be unit
    /// length. For a pure `p` the real part of the result is zero up to
    /// rounding.
    #[inline]
    pub fn rotate(&self, p: &Self) -> Self {
        *self * *p * self.inverse()
    }

    /// Rotate a 3-vector by `self`.
    #[inline]
    pub fn rotate_vector(&self, v: &Vector3<T>) -> Vector3<T> {
        self.rotate(&Self::pure(*v)).vector()
    }
}

// ── Operators ────────────────────────────────────────────────────────

impl<T: FloatScalar> Add for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.w + rhs.w, self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: FloatScalar> Sub for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.w - rhs.w, self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// Hamilton product: q1 * q2
impl<T: FloatScalar> Mul for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        }
    }
}

// Reference variants, all delegating to the by-value impls above.
macro_rules! impl_ref_binops {
    ($($trait:ident :: $method:ident),*) => {
        $(
            impl<T: FloatScalar> $trait<Quaternion<T>> for &Quaternion<T> {
                type Output = Quaternion<T>;
                #[inline]
                fn $method(self, rhs: Quaternion<T>) -> Quaternion<T> {
                    (*self).$method(rhs)
                }
            }

            impl<T: FloatScalar> $trait<&Quaternion<T>> for Quaternion<T> {
                type Output = Quaternion<T>;
                #[inline]
                fn $method(self, rhs: &Quaternion<T>) -> Quaternion<T> {
                    self.$method(*rhs)
                }
            }

            impl<T: FloatScalar> $trait<&Quaternion<T>> for &Quaternion<T> {
                type Output = Quaternion<T>;
                #[inline]
                fn $method(self, rhs: &Quaternion<T>) -> Quaternion<T> {
                    (*self).$method(*rhs)
                }
            }
        )*
    };
}

impl_ref_binops!(Add::add, Sub::sub, Mul::mul);

impl<T: FloatScalar> AddAssign for Quaternion<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: FloatScalar> SubAssign for Quaternion<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

// `q *= r` is `q = q * r`, the receiver stays on the left.
impl<T: FloatScalar> MulAssign for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// Rotate a vector: q * v computes q v q⁻¹
impl<T: FloatScalar> Mul<Vector3<T>> for Quaternion<T> {
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, v: Vector3<T>) -> Vector3<T> {
        self.rotate_vector(&v)
    }
}

impl<T: FloatScalar> Mul<&Vector3<T>> for &Quaternion<T> {
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, v: &Vector3<T>) -> Vector3<T> {
        self.rotate_vector(v)
    }
}

impl<T: FloatScalar> Neg for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

impl<T: FloatScalar> Neg for &Quaternion<T> {
    type Output = Quaternion<T>;

    #[inline]
    fn neg(self) -> Quaternion<T> {
        (*self).neg()
    }
}

/// A quaternion is zero (falsy) iff all four components are zero.
impl<T: FloatScalar> Zero for Quaternion<T> {
    #[inline]
    fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.w.is_zero() && self.x.is_zero() && self.y.is_zero() && self.z.is_zero()
    }
}

impl<T: FloatScalar> One for Quaternion<T> {
    #[inline]
    fn one() -> Self {
        Self::identity()
    }
}

// ── Conversions ──────────────────────────────────────────────────────

impl<T: FloatScalar> From<[T; 4]> for Quaternion<T> {
    /// Components in `[w, x, y, z]` order.
    #[inline]
    fn from([w, x, y, z]: [T; 4]) -> Self {
        Self::new(w, x, y, z)
    }
}

impl<T> From<Quaternion<T>> for [T; 4] {
    #[inline]
    fn from(q: Quaternion<T>) -> Self {
        [q.w, q.x, q.y, q.z]
    }
}

// ── Display ──────────────────────────────────────────────────────────

/// Formats as `w +xi +yj +zk`, three decimals unless a precision is given.
///
/// ```
/// use hamilton::Quaternion;
///
/// let q = Quaternion::new(1.0, -2.0, 3.0, -4.0);
/// assert_eq!(format!("{q}"), "1.000 -2.000i +3.000j -4.000k");
/// assert_eq!(format!("{q:.1}"), "1.0 -2.0i +3.0j -4.0k");
/// ```
impl<T: fmt::Display> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(3);
        write!(
            f,
            "{:.*} {:+.*}i {:+.*}j {:+.*}k",
            p, self.w, p, self.x, p, self.y, p, self.z
        )
    }
}

// ── Approximate equality ─────────────────────────────────────────────

impl<T: FloatScalar + AbsDiffEq<Epsilon = T>> AbsDiffEq for Quaternion<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.w.abs_diff_eq(&other.w, epsilon)
            && self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl<T: FloatScalar + RelativeEq<Epsilon = T>> RelativeEq for Quaternion<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.w.relative_eq(&other.w, epsilon, max_relative)
            && self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl<T: FloatScalar + UlpsEq<Epsilon = T>> UlpsEq for Quaternion<T> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.w.ulps_eq(&other.w, epsilon, max_ulps)
            && self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}
