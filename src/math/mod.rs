//! Numeric helpers shared by the transforms

/// Rounding and channel saturation rules
pub mod rounding;
