//! Numeric conversion helpers used across the project.
//!
//! These utilities guard conversions from floating-point time values into
//! integer counters. Out-of-range and non-finite inputs saturate instead of
//! wrapping.

/// Floor the value and convert to `u32`.
///
/// Negative values and `NaN` map to `0`; values beyond `u32::MAX` saturate.
///
/// # Examples
/// ```
/// use slither::numeric::floor_to_u32;
/// assert_eq!(floor_to_u32(2.9), 2);
/// assert_eq!(floor_to_u32(-1.0), 0);
/// assert_eq!(floor_to_u32(f64::NAN), 0);
/// ```
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "The floored value is clamped to the u32 domain before casting."
)]
#[must_use]
pub fn floor_to_u32(value: f64) -> u32 {
    if value.is_nan() {
        return 0;
    }
    let floored = value.floor();
    floored.clamp(0.0, f64::from(u32::MAX)) as u32
}

/// Ceil the value and convert to `u32`, with the same saturation rules as
/// [`floor_to_u32`].
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "The ceiled value is clamped to the u32 domain before casting."
)]
#[must_use]
pub fn ceil_to_u32(value: f64) -> u32 {
    if value.is_nan() {
        return 0;
    }
    let ceiled = value.ceil();
    ceiled.clamp(0.0, f64::from(u32::MAX)) as u32
}

/// Convert a `u32` into `f32`, accepting the precision loss above 2^24.
#[expect(
    clippy::cast_precision_loss,
    reason = "Counters used here stay far below 2^24."
)]
#[must_use]
pub const fn u32_to_f32(value: u32) -> f32 {
    value as f32
}
