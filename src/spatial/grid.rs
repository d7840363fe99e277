//! Immutable RGB pixel grid
//!
//! Every image the engine touches is a [`PixelGrid`]: `height x width` cells of
//! three `u8` channels stored row-major in an `(height, width, 3)` array. The
//! grid exposes no mutation; transforms build a new grid and callers that need
//! the raw cells receive an independent copy.

use ndarray::{Array3, ArrayView3, Axis};

use crate::io::error::{Result, invalid_argument};

/// Number of color channels per pixel
pub const CHANNELS: usize = 3;

/// One pixel as `[red, green, blue]`
pub type Rgb = [u8; CHANNELS];

/// Rectangular grid of RGB triples
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    data: Array3<u8>,
}

impl PixelGrid {
    /// Build a grid from rows of pixels
    ///
    /// An empty slice produces a `0 x 0` grid.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the rows do not all have the same length
    pub fn from_rows(rows: &[Vec<Rgb>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(invalid_argument(
                "rows",
                &format!("row {index} has {} pixels", row.len()),
                &format!("every row must have {width} pixels"),
            ));
        }

        Ok(Self::from_fn(height, width, |row, col| {
            rows.get(row)
                .and_then(|cells| cells.get(col))
                .copied()
                .unwrap_or_default()
        }))
    }

    /// Build a grid from an `(height, width, 3)` channel array
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the last axis does not hold exactly three channels
    pub fn from_array(data: Array3<u8>) -> Result<Self> {
        let (_, _, channels) = data.dim();
        if channels != CHANNELS {
            return Err(invalid_argument(
                "data",
                &format!("{channels} channels"),
                &"pixel grids hold exactly 3 channels (r, g, b)",
            ));
        }
        Ok(Self { data })
    }

    /// Build a grid by evaluating `pixel(row, col)` at every coordinate
    pub fn from_fn<F>(height: usize, width: usize, mut pixel: F) -> Self
    where
        F: FnMut(usize, usize) -> Rgb,
    {
        let mut data = Array3::zeros((height, width, CHANNELS));
        for row in 0..height {
            for col in 0..width {
                let rgb = pixel(row, col);
                for (channel, value) in rgb.into_iter().enumerate() {
                    if let Some(slot) = data.get_mut((row, col, channel)) {
                        *slot = value;
                    }
                }
            }
        }
        Self { data }
    }

    /// Wrap an array already known to hold three channels
    pub(crate) fn from_channels(data: Array3<u8>) -> Self {
        Self { data }
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    /// Grid dimensions as `(height, width)`
    pub fn dimensions(&self) -> (usize, usize) {
        let (height, width, _) = self.data.dim();
        (height, width)
    }

    /// Total number of pixels
    pub fn pixel_count(&self) -> usize {
        self.height() * self.width()
    }

    /// Check whether the grid holds no pixels
    pub fn is_empty(&self) -> bool {
        self.pixel_count() == 0
    }

    /// Color at `(row, col)`, or `None` outside the grid
    pub fn pixel(&self, row: usize, col: usize) -> Option<Rgb> {
        Some([
            *self.data.get((row, col, 0))?,
            *self.data.get((row, col, 1))?,
            *self.data.get((row, col, 2))?,
        ])
    }

    /// Independent copy of every row
    pub fn to_rows(&self) -> Vec<Vec<Rgb>> {
        (0..self.height())
            .map(|row| {
                (0..self.width())
                    .filter_map(|col| self.pixel(row, col))
                    .collect()
            })
            .collect()
    }

    /// Independent copy of the channel array
    pub fn to_array(&self) -> Array3<u8> {
        self.data.clone()
    }

    /// Row-major `0xRRGGBB` words, the layout of a packed native RGB raster
    pub fn to_packed_rgb(&self) -> Vec<u32> {
        self.data
            .lanes(Axis(2))
            .into_iter()
            .map(|lane| {
                lane.iter()
                    .fold(0_u32, |packed, &channel| (packed << 8) | u32::from(channel))
            })
            .collect()
    }

    /// Read-only view for transforms inside the crate
    pub(crate) fn channels(&self) -> ArrayView3<'_, u8> {
        self.data.view()
    }

    /// Apply `f` to every pixel, producing a new grid
    pub(crate) fn map_pixels<F>(&self, mut f: F) -> Self
    where
        F: FnMut(Rgb) -> Rgb,
    {
        let mut data = self.data.clone();
        for mut lane in data.lanes_mut(Axis(2)) {
            let mut rgb = [0; CHANNELS];
            for (slot, &value) in rgb.iter_mut().zip(lane.iter()) {
                *slot = value;
            }
            for (slot, value) in lane.iter_mut().zip(f(rgb)) {
                *slot = value;
            }
        }
        Self { data }
    }
}
