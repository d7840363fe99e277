//! Pixel-grid image transformation engine
//!
//! Images are immutable grids of RGB triples. The engine convolves them with
//! square kernels, maps their colors through 3x3 matrices, reduces them to
//! black and white by error diffusion, quantizes them into random Voronoi
//! mosaics, and generates flag and checkerboard patterns from sizes alone.
//! Every transform returns a new grid and leaves its input untouched.

#![forbid(unsafe_code)]

/// Error diffusion, mosaics and the transform catalog
pub mod algorithm;
/// Convolution kernels and color matrices
pub mod filters;
/// Input/output, scripting, history and error handling
pub mod io;
/// Rounding and channel saturation helpers
pub mod math;
/// Procedural flag and checkerboard generators
pub mod patterns;
/// Pixel grid data model and coordinate sets
pub mod spatial;

pub use io::error::{ImagingError, Result};
pub use spatial::{PixelGrid, Rgb};
