//! Numeric element types a [`Vector3`](crate::Vector3) can hold.

use num_traits::{Float, Num, NumCast};
use std::fmt::Debug;

/// Scalar type usable as a vector component.
///
/// Anything with the usual arithmetic, a zero and an ordering qualifies.
/// Implemented for `f32`, `f64`, `i16`, `i32` and `i64`.
pub trait Element: Num + NumCast + Copy + PartialOrd + Debug + 'static {}

/// Floating-point element with a vector length threshold.
pub trait FloatElement: Element + Float {
    /// Minimal vector length.
    ///
    /// Squared lengths at or below `EPSILON²` are treated as zero, and squared
    /// lengths within `EPSILON²` of one are treated as exactly one.
    const EPSILON: Self;

    /// Returns `EPSILON²`, the threshold applied to squared lengths.
    #[inline]
    fn epsilon_squared() -> Self {
        Self::EPSILON * Self::EPSILON
    }
}

macro_rules! impl_element {
    ($($t:ty),*) => {
        $(impl Element for $t {})*
    };
}

impl_element!(f32, f64, i16, i32, i64);

impl FloatElement for f32 {
    const EPSILON: Self = 1e-6;
}

impl FloatElement for f64 {
    const EPSILON: Self = 1e-10;
}

/// Floating-point precision of [`Vec3`](crate::Vec3).
#[cfg(not(feature = "single-precision"))]
pub type Real = f64;

/// Floating-point precision of [`Vec3`](crate::Vec3).
#[cfg(feature = "single-precision")]
pub type Real = f32;

/// Length threshold matching the selected [`Real`] precision.
pub const REAL_EPSILON: Real = <Real as FloatElement>::EPSILON;
