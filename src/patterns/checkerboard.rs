//! Fixed 8x8 checkerboard

use crate::io::error::{Result, invalid_argument};
use crate::patterns::palette::{BLACK, WHITE};
use crate::spatial::PixelGrid;

/// Squares along each side of the board
pub const BOARD_SQUARES: usize = 8;

/// Generate an 8x8 board of `square_size` pixel squares, white in the top-left
///
/// # Errors
///
/// Returns `InvalidArgument` if `square_size` is zero
pub fn checkerboard(square_size: usize) -> Result<PixelGrid> {
    if square_size < 1 {
        return Err(invalid_argument(
            "square_size",
            &square_size,
            &"square size must be at least 1",
        ));
    }

    let side = square_size.checked_mul(BOARD_SQUARES).ok_or_else(|| {
        invalid_argument("square_size", &square_size, &"board size overflows")
    })?;

    Ok(PixelGrid::from_fn(side, side, |row, col| {
        if (row / square_size + col / square_size) % 2 == 0 {
            WHITE
        } else {
            BLACK
        }
    }))
}
