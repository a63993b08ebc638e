//! Scalar helpers for blending and byte conversion

use log::warn;
use num_traits::{Float, NumCast, clamp};

/// Linear interpolation `a * (1 - t) + b * t`
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a * (T::one() - t) + b * t
}

/// Round and clamp a channel value into a byte
///
/// NaN maps to zero.
pub fn to_channel<T: Float>(value: T) -> u8 {
    let max = <T as NumCast>::from(255.0_f64).unwrap_or_else(T::one);
    clamp(value.round(), T::zero(), max).to_u8().unwrap_or(0)
}

/// Clamp a parameter into `[min, max]`, logging when it moves
///
/// NaN is replaced by `fallback`.
pub fn clamp_parameter(name: &'static str, value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        warn!("{name} is NaN, using {fallback}");
        return fallback;
    }
    let clamped = clamp(value, min, max);
    if (clamped - value).abs() > f32::EPSILON {
        warn!("{name} = {value} outside [{min}, {max}], clamped to {clamped}");
    }
    clamped
}

/// Clamp an `intensity`-style parameter into `[0, 1]`
pub fn unit_interval(name: &'static str, value: f32, fallback: f32) -> f32 {
    clamp_parameter(name, value, 0.0, 1.0, fallback)
}
