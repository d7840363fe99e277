//! Per-pixel filters: spatial convolution and linear color transforms

/// Linear 3x3 color transforms and their presets
pub mod color;
/// Square convolution kernels and their presets
pub mod kernel;

pub use color::{ColorMatrix, GREYSCALE, SEPIA};
pub use kernel::{BLUR, Kernel, SHARPEN};
