//! Pixel storage and coordinate bookkeeping
//!
//! This module contains the image data model and the helpers that walk it:
//! - The immutable RGB pixel grid
//! - A visited-coordinate bitset used for sampling without replacement

/// Immutable RGB pixel grid
pub mod grid;
/// Fixed-size set of flattened grid coordinates
pub mod visited;

pub use grid::{CHANNELS, PixelGrid, Rgb};
pub use visited::CoordinateSet;
