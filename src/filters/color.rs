//! Linear 3x3 color transforms

use crate::io::error::{Result, invalid_argument};
use crate::math::rounding::round_to_channel;
use crate::spatial::{CHANNELS, PixelGrid, Rgb};

/// Luma weights repeated on every row, so all three outputs are equal
pub const GREYSCALE: ColorMatrix = ColorMatrix::from_rows([
    [0.2126, 0.7152, 0.0722],
    [0.2126, 0.7152, 0.0722],
    [0.2126, 0.7152, 0.0722],
]);

/// Classic warm-brown sepia tone
pub const SEPIA: ColorMatrix = ColorMatrix::from_rows([
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
]);

/// Immutable 3x3 matrix mapping an input channel vector to an output one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix {
    rows: [[f64; CHANNELS]; CHANNELS],
}

impl ColorMatrix {
    /// Build a matrix from a fixed-size array
    pub const fn from_rows(rows: [[f64; CHANNELS]; CHANNELS]) -> Self {
        Self { rows }
    }

    /// Build a matrix from rows of arbitrary length
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` unless there are exactly three rows of three weights
    pub fn new(rows: &[Vec<f64>]) -> Result<Self> {
        let shape_error = || {
            invalid_argument(
                "matrix",
                &format!(
                    "{}x[{}]",
                    rows.len(),
                    rows.iter()
                        .map(|row| row.len().to_string())
                        .collect::<Vec<_>>()
                        .join(",")
                ),
                &"color matrix must be exactly 3x3",
            )
        };

        let array: [Vec<f64>; CHANNELS] = rows
            .to_vec()
            .try_into()
            .map_err(|_mismatch| shape_error())?;
        let mut matrix = [[0.0; CHANNELS]; CHANNELS];
        for (target, source) in matrix.iter_mut().zip(&array) {
            *target = source.as_slice().try_into().map_err(|_mismatch| shape_error())?;
        }
        Ok(Self::from_rows(matrix))
    }

    /// Copy of the weights
    pub const fn rows(&self) -> [[f64; CHANNELS]; CHANNELS] {
        self.rows
    }

    /// Transform a single pixel
    ///
    /// Each output channel is the dot product of a matrix row with the input,
    /// rounded half away from zero and clamped to `0..=255`.
    pub fn transform(&self, pixel: Rgb) -> Rgb {
        self.rows.map(|weights| {
            let sum: f64 = weights
                .iter()
                .zip(pixel)
                .map(|(weight, channel)| weight * f64::from(channel))
                .sum();
            round_to_channel(sum)
        })
    }

    /// Transform every pixel of `grid`
    pub fn apply(&self, grid: &PixelGrid) -> PixelGrid {
        grid.map_pixels(|pixel| self.transform(pixel))
    }
}

/// Apply `matrix` to every pixel of `grid`
pub fn apply_color_matrix(grid: &PixelGrid, matrix: &ColorMatrix) -> PixelGrid {
    matrix.apply(grid)
}

/// Convert `grid` to luma greyscale
pub fn greyscale(grid: &PixelGrid) -> PixelGrid {
    GREYSCALE.apply(grid)
}

/// Apply the sepia tone to `grid`
pub fn sepia(grid: &PixelGrid) -> PixelGrid {
    SEPIA.apply(grid)
}
