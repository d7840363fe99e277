//! Transform descriptions that can be stored, parsed and applied later

use rand::Rng;
use std::fmt;

use crate::algorithm::dither::dither;
use crate::algorithm::mosaic::mosaic;
use crate::filters::color::{greyscale, sepia};
use crate::filters::kernel::{blur, sharpen};
use crate::io::error::Result;
use crate::spatial::PixelGrid;

/// One image-to-image transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// 3x3 smoothing convolution
    Blur,
    /// 5x5 sharpening convolution
    Sharpen,
    /// Luma greyscale
    Greyscale,
    /// Sepia tone
    Sepia,
    /// Black and white error diffusion
    Dither,
    /// Voronoi mosaic
    Mosaic {
        /// Number of random seeds
        seeds: i64,
    },
}

impl Operation {
    /// Apply the transform to `grid`
    ///
    /// Only [`Operation::Mosaic`] draws from `rng`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a negative mosaic seed count
    pub fn apply<R: Rng + ?Sized>(&self, grid: &PixelGrid, rng: &mut R) -> Result<PixelGrid> {
        match *self {
            Self::Blur => Ok(blur(grid)),
            Self::Sharpen => Ok(sharpen(grid)),
            Self::Greyscale => Ok(greyscale(grid)),
            Self::Sepia => Ok(sepia(grid)),
            Self::Dither => Ok(dither(grid)),
            Self::Mosaic { seeds } => mosaic(grid, seeds, rng),
        }
    }

    /// Short lowercase name, used for output file suffixes
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Blur => "blur",
            Self::Sharpen => "sharpen",
            Self::Greyscale => "greyscale",
            Self::Sepia => "sepia",
            Self::Dither => "dither",
            Self::Mosaic { .. } => "mosaic",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mosaic { seeds } => write!(f, "mosaic {seeds}"),
            other => write!(f, "{}", other.name()),
        }
    }
}
