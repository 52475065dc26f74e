//! Tait-Bryan angle conversions, in degrees.
//!
//! Angles are extrinsic, measured against the fixed coordinate frame.
//! `to_euler` reports them under X3D labels: roll about X, pitch about Z,
//! yaw about Y. `from_euler` keeps the same parameter names for
//! compatibility, but its `yaw` argument turns about X and its `roll`
//! argument about Y, so the two functions round-trip positionally.

use super::Quaternion;
use crate::traits::{constant, FloatScalar};

/// Fraction of the squared magnitude above which `to_euler` treats the
/// orientation as pointing at a pole (pitch = ±90°).
pub const POLE_THRESHOLD: f64 = 0.4999;

impl<T: FloatScalar> Quaternion<T> {
    /// Convert to Tait-Bryan angles `(roll, pitch, yaw)` in degrees:
    /// roll about X, pitch about Z, yaw about Y.
    ///
    /// The receiver does not have to be normalized; its squared magnitude
    /// is used as a correction factor. Near pitch = ±90° (gimbal lock) roll
    /// is fixed at zero and the whole heading is reported as yaw.
    ///
    /// Angles produced by [`from_euler`](Self::from_euler) come back in
    /// argument order: `from_euler(a, b, c).to_euler() ≈ (a, b, c)`.
    ///
    /// ```
    /// use hamilton::Quaternion;
    ///
    /// let (a, b, c) = Quaternion::from_euler(36.0_f64, 22.5, 36.0).to_euler();
    /// assert!((a - 36.0).abs() < 1e-9);
    /// assert!((b - 22.5).abs() < 1e-9);
    /// assert!((c - 36.0).abs() < 1e-9);
    /// ```
    pub fn to_euler(&self) -> (T, T, T) {
        let two = T::one() + T::one();
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);

        let sqw = w * w;
        let sqx = x * x;
        let sqy = y * y;
        let sqz = z * z;
        // One when normalized, otherwise a correction factor
        let unit = sqx + sqy + sqz + sqw;
        let test = x * y + z * w;
        let pole = constant::<T>(POLE_THRESHOLD) * unit;
        let quarter_turn = constant::<T>(90.0);

        if test > pole {
            // North pole
            let yaw = two * x.atan2(w);
            (T::zero(), quarter_turn, yaw.to_degrees())
        } else if test < -pole {
            // South pole
            let yaw = -two * x.atan2(w);
            (T::zero(), -quarter_turn, yaw.to_degrees())
        } else {
            let yaw = (two * (y * w - x * z)).atan2(sqx - sqy - sqz + sqw);
            let pitch = (two * test / unit).asin();
            let roll = (two * (w * x - y * z)).atan2(-sqx + sqy - sqz + sqw);
            (roll.to_degrees(), pitch.to_degrees(), yaw.to_degrees())
        }
    }

    /// Build a unit quaternion from Tait-Bryan angles in degrees.
    ///
    /// The parameter names follow the X3D labels but not their axes:
    /// `yaw` turns about X, `pitch` about Z and `roll` about Y. This is the
    /// inverse of [`to_euler`](Self::to_euler) slot by slot, so `yaw` comes
    /// back as its roll and `roll` as its yaw. The angles are extrinsic, so
    /// the elementary rotations compose in reverse order.
    pub fn from_euler(yaw: T, pitch: T, roll: T) -> Self {
        let half = T::one() / (T::one() + T::one());
        let (s3, c3) = (yaw * half).to_radians().sin_cos();
        let (s2, c2) = (pitch * half).to_radians().sin_cos();
        let (s1, c1) = (roll * half).to_radians().sin_cos();

        let c1c2 = c1 * c2;
        let s1s2 = s1 * s2;

        let mut q = Self::new(
            c1c2 * c3 - s1s2 * s3,
            c1c2 * s3 + s1s2 * c3,
            s1 * c2 * c3 + c1 * s2 * s3,
            c1 * s2 * c3 - s1 * c2 * s3,
        );
        q.normalize();
        q
    }

    /// Build a unit quaternion from Tait-Bryan angles about X, Y and Z, in degrees.
    ///
    /// This is one of the twelve quaternions that reach a given
    /// orientation; it differs from [`from_euler`](Self::from_euler) in
    /// composition order, not just in argument order.
    pub fn from_tait_bryan_xyz(x: T, y: T, z: T) -> Self {
        let half = T::one() / (T::one() + T::one());
        let (s1, c1) = (x * half).to_radians().sin_cos();
        let (s2, c2) = (y * half).to_radians().sin_cos();
        let (s3, c3) = (z * half).to_radians().sin_cos();

        let mut q = Self::new(
            c1 * c2 * c3 - s1 * s2 * s3,
            s1 * c2 * c3 + c1 * s2 * s3,
            c1 * s2 * c3 - s1 * c2 * s3,
            c1 * c2 * s3 + s1 * s2 * c3,
        );
        q.normalize();
        q
    }
}
