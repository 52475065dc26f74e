use core::fmt::Debug;
use num_traits::Float;

/// Trait for floating-point quaternion components.
///
/// Blanket-implemented for all types satisfying the bounds, which in
/// practice means `f32` and `f64`. Provides `sqrt`, `sin_cos`, `atan2`,
/// `asin` and degree/radian conversion through [`Float`].
pub trait FloatScalar: Copy + PartialEq + Debug + Float {}

impl<T: Copy + PartialEq + Debug + Float> FloatScalar for T {}

/// Convert an `f64` constant into `T`.
///
/// Every `FloatScalar` can represent (or round) a finite `f64`, so the
/// conversion cannot fail for the literals used in this crate.
#[inline]
pub(crate) fn constant<T: FloatScalar>(value: f64) -> T {
    T::from(value).unwrap()
}
