// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar types and the free-standing helpers shared by every vector,
//! quaternion and matrix type.
//!
//! Precision is a build-time choice:
//! - `Real` is `f32`, or `f64` with the `f64` feature.
//! - `Int` is `i32`, or `i8`/`i16`/`i64` with `int8`/`int16`/`int64`.
//!
//! Switching precision never changes which formula an operation uses; only
//! the rounding of its intermediate values.

#[cfg(any(
    all(feature = "int8", feature = "int16"),
    all(feature = "int8", feature = "int64"),
    all(feature = "int16", feature = "int64"),
))]
compile_error!("at most one of the `int8`, `int16` and `int64` features may be enabled");

/// Floating-point scalar used by vectors, quaternions and matrices.
#[cfg(not(feature = "f64"))]
pub type Real = f32;

/// Floating-point scalar used by vectors, quaternions and matrices.
#[cfg(feature = "f64")]
pub type Real = f64;

/// Signed integer scalar used by the integer vectors.
#[cfg(feature = "int8")]
pub type Int = i8;

/// Signed integer scalar used by the integer vectors.
#[cfg(all(feature = "int16", not(feature = "int8")))]
pub type Int = i16;

/// Signed integer scalar used by the integer vectors.
#[cfg(all(feature = "int64", not(any(feature = "int8", feature = "int16"))))]
pub type Int = i64;

/// Signed integer scalar used by the integer vectors.
#[cfg(not(any(feature = "int8", feature = "int16", feature = "int64")))]
pub type Int = i32;

/// Machine epsilon of [`Real`].
///
/// Used by the `is_zero`/`is_equal` helpers and as the near-identity
/// threshold in [`crate::Quat::power`].
pub const EPSILON: Real = Real::EPSILON;

/// Mathematical constants (`PI`, `FRAC_PI_2`, `TAU`, …) at [`Real`] precision.
pub mod consts {
    #[cfg(not(feature = "f64"))]
    pub use core::f32::consts::*;

    #[cfg(feature = "f64")]
    pub use core::f64::consts::*;
}

use consts::TAU;

/// Clamps `value` to `[min, max]`.
///
/// Returns `min` when `value < min`, `max` when `value > max`, and `value`
/// otherwise. The bounds are not validated; with `min > max` the first
/// matching comparison wins.
#[allow(clippy::manual_clamp)]
pub fn clamp(value: Real, min: Real, max: Real) -> Real {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Integer counterpart of [`clamp`].
#[cfg(feature = "int")]
#[allow(clippy::manual_clamp)]
pub fn clampi(value: Int, min: Int, max: Int) -> Int {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Returns `true` when `a == b` or `|a - b| <= epsilon`.
///
/// The exact comparison comes first so equal infinities compare equal.
pub fn nearly_equal(a: Real, b: Real, epsilon: Real) -> bool {
    a == b || (a - b).abs() <= epsilon
}

/// Converts degrees to radians. No range reduction is applied.
pub fn to_radians(degrees: Real) -> Real {
    degrees * (TAU / 360.0)
}

/// Converts radians to degrees. No range reduction is applied.
pub fn to_degrees(radians: Real) -> Real {
    radians * (360.0 / TAU)
}

/// `1`, `-1` or `0` depending on the sign of `value`; zero of either sign maps to `0`.
pub(crate) fn sign(value: Real) -> Real {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Unclamped linear interpolation, exact at `f == 0` and `f == 1`.
pub(crate) fn lerp(a: Real, b: Real, f: Real) -> Real {
    a * (1.0 - f) + b * f
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_picks_bound_or_value() {
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
    }

    #[test]
    fn sign_of_signed_zero_is_zero() {
        assert_eq!(sign(-0.0).to_bits(), (0.0 as Real).to_bits());
        assert_eq!(sign(-3.5), -1.0);
        assert_eq!(sign(0.001), 1.0);
    }

    #[test]
    fn lerp_endpoints_are_exact() {
        let (a, b) = (0.1, 0.3);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
    }
}
