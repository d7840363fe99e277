//! Square convolution kernels and their application to pixel grids
//!
//! Taps that land outside the source grid are dropped from the sum rather
//! than padded or clamped, and the kernel is not renormalized near edges.
//! Border pixels of a blurred image therefore come out darker than the
//! interior.

use ndarray::{Array2, Array3};
use std::sync::LazyLock;

use crate::io::error::{Result, invalid_argument};
use crate::math::rounding::round_to_channel;
use crate::spatial::{CHANNELS, PixelGrid};

/// Normalized 3x3 smoothing kernel
pub static BLUR: LazyLock<Kernel> = LazyLock::new(|| {
    Kernel::from_validated(ndarray::arr2(&[
        [0.0625, 0.125, 0.0625],
        [0.125, 0.25, 0.125],
        [0.0625, 0.125, 0.0625],
    ]))
});

/// Unnormalized 5x5 sharpening kernel
pub static SHARPEN: LazyLock<Kernel> = LazyLock::new(|| {
    Kernel::from_validated(ndarray::arr2(&[
        [-0.125, -0.125, -0.125, -0.125, -0.125],
        [-0.125, 0.25, 0.25, 0.25, -0.125],
        [-0.125, 0.25, 1.0, 0.25, -0.125],
        [-0.125, 0.25, 0.25, 0.25, -0.125],
        [-0.125, -0.125, -0.125, -0.125, -0.125],
    ]))
});

/// Immutable square matrix of weights with odd side length
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    weights: Array2<f64>,
}

impl Kernel {
    /// Build a kernel from rows of weights
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the rows are empty, not square, or of even side length
    pub fn new(rows: &[Vec<f64>]) -> Result<Self> {
        let size = rows.len();
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != size) {
            return Err(invalid_argument(
                "kernel",
                &format!("row {index} has {} weights", row.len()),
                &format!("kernel must be square ({size} weights per row)"),
            ));
        }

        let weights = Array2::from_shape_fn((size, size), |(i, j)| {
            rows.get(i)
                .and_then(|row| row.get(j))
                .copied()
                .unwrap_or(0.0)
        });
        Self::from_array(weights)
    }

    /// Build a kernel from a weight matrix
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the matrix is empty, not square, or of even side length
    pub fn from_array(weights: Array2<f64>) -> Result<Self> {
        let (rows, cols) = weights.dim();
        if rows != cols {
            return Err(invalid_argument(
                "kernel",
                &format!("{rows}x{cols}"),
                &"kernel must be square",
            ));
        }
        if rows == 0 {
            return Err(invalid_argument("kernel", &"0x0", &"kernel must not be empty"));
        }
        if rows % 2 == 0 {
            return Err(invalid_argument(
                "kernel",
                &format!("{rows}x{cols}"),
                &"kernel side length must be odd",
            ));
        }
        Ok(Self::from_validated(weights))
    }

    // Presets are written out by hand and already satisfy the shape rules
    fn from_validated(weights: Array2<f64>) -> Self {
        Self { weights }
    }

    /// Side length of the kernel
    pub fn size(&self) -> usize {
        self.weights.nrows()
    }

    /// Weight at `(row, col)` of the kernel, or `None` outside it
    pub fn weight(&self, row: usize, col: usize) -> Option<f64> {
        self.weights.get((row, col)).copied()
    }

    /// Independent copy of the weights
    pub fn to_array(&self) -> Array2<f64> {
        self.weights.clone()
    }

    /// Convolve every channel of `grid` with this kernel
    ///
    /// Each output channel is the weighted sum of the in-bounds taps, rounded
    /// half away from zero and clamped to `0..=255`.
    pub fn apply(&self, grid: &PixelGrid) -> PixelGrid {
        let (height, width) = grid.dimensions();
        let source = grid.channels();
        let half = self.size() / 2;

        let output = Array3::from_shape_fn((height, width, CHANNELS), |(row, col, channel)| {
            let mut sum = 0.0;
            for ((i, j), &weight) in self.weights.indexed_iter() {
                let (Some(source_row), Some(source_col)) =
                    (tap_index(row, i, half), tap_index(col, j, half))
                else {
                    continue;
                };
                if let Some(&value) = source.get((source_row, source_col, channel)) {
                    sum += weight * f64::from(value);
                }
            }
            round_to_channel(sum)
        });

        PixelGrid::from_channels(output)
    }
}

/// Convolve `grid` with `kernel`
pub fn convolve(grid: &PixelGrid, kernel: &Kernel) -> PixelGrid {
    kernel.apply(grid)
}

/// Smooth `grid` with the [`BLUR`] preset
pub fn blur(grid: &PixelGrid) -> PixelGrid {
    BLUR.apply(grid)
}

/// Sharpen `grid` with the [`SHARPEN`] preset
pub fn sharpen(grid: &PixelGrid) -> PixelGrid {
    SHARPEN.apply(grid)
}

// Source coordinate `center - half + tap`, or None when it falls before the grid
const fn tap_index(center: usize, tap: usize, half: usize) -> Option<usize> {
    (center + tap).checked_sub(half)
}
