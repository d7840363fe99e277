//! Pattern descriptions that can be stored, parsed and rendered later

use std::fmt;

use crate::io::error::Result;
use crate::patterns::checkerboard::checkerboard;
use crate::patterns::flags::{
    StripeDirection, french_flag, greek_flag, rainbow_flag, swiss_flag,
};
use crate::spatial::PixelGrid;

/// One procedural pattern with its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Seven-stripe rainbow flag
    RainbowFlag {
        /// Image height in pixels
        height: usize,
        /// Image width in pixels
        width: usize,
        /// Axis the stripes are stacked along
        direction: StripeDirection,
    },
    /// 8x8 black and white board
    Checkerboard {
        /// Side of one square in pixels
        square_size: usize,
    },
    /// French tricolour
    FrenchFlag {
        /// Image height in pixels
        height: usize,
        /// Image width in pixels
        width: usize,
    },
    /// Swiss cross
    SwissFlag {
        /// Image height in pixels
        height: usize,
        /// Image width in pixels
        width: usize,
    },
    /// Greek stripes and canton cross
    GreekFlag {
        /// Image height in pixels
        height: usize,
        /// Image width in pixels
        width: usize,
    },
}

impl Pattern {
    /// Render the pattern into a new grid
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if a size parameter is below the pattern's minimum
    pub fn render(&self) -> Result<PixelGrid> {
        match *self {
            Self::RainbowFlag {
                height,
                width,
                direction,
            } => rainbow_flag(height, width, direction),
            Self::Checkerboard { square_size } => checkerboard(square_size),
            Self::FrenchFlag { height, width } => french_flag(height, width),
            Self::SwissFlag { height, width } => swiss_flag(height, width),
            Self::GreekFlag { height, width } => greek_flag(height, width),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RainbowFlag {
                height,
                width,
                direction,
            } => write!(f, "rainbowFlag {height} {width} {direction}"),
            Self::Checkerboard { square_size } => write!(f, "checkerboard {square_size}"),
            Self::FrenchFlag { height, width } => write!(f, "frenchFlag {height} {width}"),
            Self::SwissFlag { height, width } => write!(f, "swissFlag {height} {width}"),
            Self::GreekFlag { height, width } => write!(f, "greekFlag {height} {width}"),
        }
    }
}
