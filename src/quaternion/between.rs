use super::Quaternion;
use crate::traits::{constant, FloatScalar};
use crate::vector::Vector3;

/// Scalar part below which `between` treats its inputs as opposite vectors.
pub const ANTIPARALLEL_THRESHOLD: f64 = 1e-4;

impl<T: FloatScalar> Quaternion<T> {
    /// Quaternion rotating `from` onto the direction of `to`.
    ///
    /// The result is `(|from|·|to| + from·to, from × to)` and is **not**
    /// unit length; call [`normalize`](Self::normalize) when a unit
    /// rotation is needed. [`rotate`](Self::rotate) uses the true inverse
    /// and accepts it as is.
    ///
    /// When the vectors are (nearly) opposite the rotation axis is not
    /// unique. The result is then the 180° rotation `(0, from × e)`,
    /// where `e` is the standard basis axis along which `from` has the
    /// smallest component (x before y before z on ties), so the axis is
    /// always perpendicular to `from`. A zero `from` yields the zero
    /// quaternion.
    ///
    /// The cutoff is the fixed absolute value [`ANTIPARALLEL_THRESHOLD`]
    /// on the scalar part, so the fallback can be inaccurate:
    ///
    /// - For unit vectors the branch is taken up to about 0.014 rad short
    ///   of exactly opposite. The result then maps `from` onto `-from`,
    ///   off from `to` by up to that angle.
    /// - The threshold does not scale with the inputs. Short vectors fall
    ///   into the half-turn branch at any angle once `|from|·|to|` is small
    ///   enough: `(0.001, 0, 0)` to `(0, 0.001, 0)` gives a quaternion
    ///   that maps `from` onto `(-0.001, 0, 0)`.
    ///
    /// Scale the inputs to unit length first when this matters.
    ///
    /// ```
    /// use hamilton::{Quaternion, Vector3};
    ///
    /// let from = Vector3::new(0.0_f64, 1.0, 0.0);
    /// let to = Vector3::new(1.0, 0.0, 0.0);
    /// let q = Quaternion::between(&from, &to);
    /// let r = q.rotate_vector(&from);
    /// assert!((r.x() - 1.0).abs() < 1e-12 && r.y().abs() < 1e-12 && r.z().abs() < 1e-12);
    /// ```
    pub fn between(from: &Vector3<T>, to: &Vector3<T>) -> Self {
        let dot = from.dot(to);
        let w = (from.norm_squared() * to.norm_squared()).sqrt() + dot;

        if w < constant::<T>(ANTIPARALLEL_THRESHOLD) {
            #[cfg(feature = "log")]
            log::debug!("between: antiparallel inputs, rotating half a turn about a perpendicular axis");
            return Self::pure(perpendicular(from));
        }

        let axis = from.cross(to);
        Self::new(w, axis[0], axis[1], axis[2])
    }
}

/// Some vector perpendicular to `v`, chosen deterministically.
///
/// Crosses `v` with the basis axis it is least aligned with, which keeps
/// the result well away from zero for any nonzero `v`.
pub(crate) fn perpendicular<T: FloatScalar>(v: &Vector3<T>) -> Vector3<T> {
    let mut axis = 0;
    for i in 1..3 {
        if v[i].abs() < v[axis].abs() {
            axis = i;
        }
    }
    v.cross(&Vector3::basis(axis))
}
