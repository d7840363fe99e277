//! Rounding and saturation of accumulated channel values
//!
//! Filters and color transforms accumulate in `f64` and round half away from
//! zero. Error diffusion rounds its propagated increments half up, so a
//! negative error of exactly `-n.5` moves toward positive infinity.

use num_traits::{ToPrimitive, clamp};

/// Largest value a channel can hold
pub const CHANNEL_MAX: u8 = u8::MAX;

/// Round to the nearest integer (ties away from zero) and saturate to a channel
pub fn round_to_channel(value: f64) -> u8 {
    clamp(value.round(), 0.0, f64::from(CHANNEL_MAX))
        .to_u8()
        .unwrap_or(0)
}

/// Saturate an integer working value to a channel
pub fn clamp_to_channel(value: i32) -> u8 {
    clamp(value, 0, i32::from(CHANNEL_MAX)).to_u8().unwrap_or(0)
}

/// Round half up, matching `floor(x + 0.5)`
///
/// Non-finite input and values outside `i32` collapse to zero.
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor().to_i32().unwrap_or(0)
}
