//! Floyd-Steinberg error diffusion to pure black and white
//!
//! The image is first reduced to luma greyscale, then visited in row-major
//! order. Each channel is snapped to 0 or 255 and the quantization error is
//! pushed onto the four unvisited neighbours. Later pixels read values that
//! earlier pixels have already adjusted, so the traversal is sequential.

use ndarray::Array3;

use crate::filters::color::GREYSCALE;
use crate::math::rounding::{CHANNEL_MAX, clamp_to_channel, round_half_up};
use crate::spatial::{CHANNELS, PixelGrid};

/// Denominator shared by all diffusion weights
pub const DIFFUSION_DENOMINATOR: i32 = 16;

/// `(row offset, column offset, numerator)` for each neighbour receiving error
pub const DIFFUSION_WEIGHTS: [(usize, isize, i32); 4] =
    [(0, 1, 7), (1, -1, 3), (1, 0, 5), (1, 1, 1)];

/// Reduce `grid` to black and white by error diffusion
///
/// Every output channel is either 0 or 255. All three channels are diffused
/// independently even though they start out equal after the greyscale pass.
pub fn dither(grid: &PixelGrid) -> PixelGrid {
    let grey = GREYSCALE.apply(grid);
    let (height, width) = grey.dimensions();

    // Neighbours may be pushed outside 0..=255 before they are visited
    let mut buffer: Array3<i32> = grey.channels().mapv(i32::from);

    for row in 0..height {
        for col in 0..width {
            for channel in 0..CHANNELS {
                let Some(cell) = buffer.get_mut((row, col, channel)) else {
                    continue;
                };
                let old_value = *cell;
                let new_value = quantize(old_value);
                *cell = new_value;

                let error = old_value - new_value;
                for &(row_offset, col_offset, numerator) in &DIFFUSION_WEIGHTS {
                    let Some(target_col) = col.checked_add_signed(col_offset) else {
                        continue;
                    };
                    if let Some(target) =
                        buffer.get_mut((row + row_offset, target_col, channel))
                    {
                        *target += round_half_up(
                            f64::from(error * numerator) / f64::from(DIFFUSION_DENOMINATOR),
                        );
                    }
                }
            }
        }
    }

    PixelGrid::from_channels(buffer.mapv(clamp_to_channel))
}

/// Snap a working value to whichever of 0 and 255 is closer, preferring 0 on ties
pub fn quantize(value: i32) -> i32 {
    let max = i32::from(CHANNEL_MAX);
    if value.abs() <= (value - max).abs() {
        0
    } else {
        max
    }
}
