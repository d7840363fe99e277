//! Striped and crossed flag generators
//!
//! Stripe thickness is the integer quotient of the relevant dimension by the
//! stripe count. Rows or columns left over by that division are painted with
//! the final stripe color.

use std::fmt;
use std::str::FromStr;

use crate::io::error::{ImagingError, Result, invalid_argument};
use crate::patterns::palette::{BLUE, RAINBOW, RED, WHITE};
use crate::spatial::{PixelGrid, Rgb};

/// Stripes in the rainbow flag
pub const RAINBOW_STRIPES: usize = 7;
/// Stripes in the French flag
pub const FRENCH_STRIPES: usize = 3;
/// Stripes in the Greek flag
pub const GREEK_STRIPES: usize = 9;

// Swiss cross bands as fractions of the flag size
const SWISS_OUTER_START: f64 = 1.0 / 5.0;
const SWISS_INNER_START: f64 = 2.0 / 5.0;
const SWISS_INNER_END: f64 = 3.0 / 5.0;
const SWISS_OUTER_END: f64 = 4.0 / 5.0;

// Greek canton extent and cross arms
const GREEK_CANTON_HEIGHT: f64 = 10.0 / 18.1;
const GREEK_CANTON_WIDTH: f64 = 10.0 / 27.0;
const GREEK_CROSS_ROW_START: f64 = 4.0 / 18.1;
const GREEK_CROSS_ROW_END: f64 = 6.0 / 18.1;
const GREEK_CROSS_COL_START: f64 = 4.0 / 27.0;
const GREEK_CROSS_COL_END: f64 = 6.0 / 27.0;

/// Axis along which rainbow stripes are stacked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripeDirection {
    /// Stripes run left to right, stacked top to bottom
    Horizontal,
    /// Stripes run top to bottom, stacked left to right
    Vertical,
}

impl FromStr for StripeDirection {
    type Err = ImagingError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "h" => Ok(Self::Horizontal),
            "v" => Ok(Self::Vertical),
            other => Err(invalid_argument(
                "direction",
                &other,
                &"direction can only be 'h' or 'v'",
            )),
        }
    }
}

impl fmt::Display for StripeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "h"),
            Self::Vertical => write!(f, "v"),
        }
    }
}

/// Generate a seven-stripe rainbow flag
///
/// # Errors
///
/// Returns `InvalidArgument` if the stacking dimension is below 7 or the other
/// dimension is zero
pub fn rainbow_flag(
    height: usize,
    width: usize,
    direction: StripeDirection,
) -> Result<PixelGrid> {
    let (stacked, stacked_name, across, across_name) = match direction {
        StripeDirection::Horizontal => (height, "height", width, "width"),
        StripeDirection::Vertical => (width, "width", height, "height"),
    };
    require_at_least(stacked_name, stacked, RAINBOW_STRIPES)?;
    require_at_least(across_name, across, 1)?;

    let thickness = stacked / RAINBOW_STRIPES;
    Ok(PixelGrid::from_fn(height, width, |row, col| {
        let position = match direction {
            StripeDirection::Horizontal => row,
            StripeDirection::Vertical => col,
        };
        stripe_color(&RAINBOW, position, thickness)
    }))
}

/// Generate the French tricolour: blue, white and red vertical stripes
///
/// # Errors
///
/// Returns `InvalidArgument` if `height` is zero or `width` is below 3
pub fn french_flag(height: usize, width: usize) -> Result<PixelGrid> {
    require_at_least("height", height, 1)?;
    require_at_least("width", width, FRENCH_STRIPES)?;

    let thickness = width / FRENCH_STRIPES;
    Ok(PixelGrid::from_fn(height, width, |_, col| {
        stripe_color(&[BLUE, WHITE, RED], col, thickness)
    }))
}

/// Generate the Swiss flag: a white plus-sign cross on red
///
/// # Errors
///
/// Returns `InvalidArgument` if either dimension is below 5
pub fn swiss_flag(height: usize, width: usize) -> Result<PixelGrid> {
    require_at_least("height", height, 5)?;
    require_at_least("width", width, 5)?;

    let (h, w) = (height as f64, width as f64);
    Ok(PixelGrid::from_fn(height, width, |row, col| {
        let (r, c) = (row as f64, col as f64);
        let horizontal_arm = within(r, h, SWISS_INNER_START, SWISS_INNER_END)
            && within(c, w, SWISS_OUTER_START, SWISS_OUTER_END);
        let vertical_arm = within(r, h, SWISS_OUTER_START, SWISS_OUTER_END)
            && within(c, w, SWISS_INNER_START, SWISS_INNER_END);
        if horizontal_arm || vertical_arm {
            WHITE
        } else {
            RED
        }
    }))
}

/// Generate the Greek flag: nine blue and white stripes with a crossed canton
///
/// # Errors
///
/// Returns `InvalidArgument` if `height` is below 9 or `width` is below 4
pub fn greek_flag(height: usize, width: usize) -> Result<PixelGrid> {
    require_at_least("height", height, GREEK_STRIPES)?;
    require_at_least("width", width, 4)?;

    let thickness = height / GREEK_STRIPES;
    let (h, w) = (height as f64, width as f64);
    Ok(PixelGrid::from_fn(height, width, |row, col| {
        let (r, c) = (row as f64, col as f64);
        let in_canton = r <= GREEK_CANTON_HEIGHT * h && c <= GREEK_CANTON_WIDTH * w;
        if !in_canton {
            let stripe = (row / thickness).min(GREEK_STRIPES - 1);
            return if stripe % 2 == 0 { BLUE } else { WHITE };
        }

        let cross = within(r, h, GREEK_CROSS_ROW_START, GREEK_CROSS_ROW_END)
            || within(c, w, GREEK_CROSS_COL_START, GREEK_CROSS_COL_END);
        if cross { WHITE } else { BLUE }
    }))
}

// Color of the stripe covering `position`; overflow past the last stripe keeps its color
fn stripe_color(colors: &[Rgb], position: usize, thickness: usize) -> Rgb {
    let last = colors.len().saturating_sub(1);
    let index = position.checked_div(thickness).unwrap_or(last).min(last);
    colors.get(index).copied().unwrap_or_default()
}

// Strictly between `start * extent` and `end * extent`
fn within(value: f64, extent: f64, start: f64, end: f64) -> bool {
    value > start * extent && value < end * extent
}

fn require_at_least(parameter: &'static str, value: usize, minimum: usize) -> Result<()> {
    if value < minimum {
        return Err(invalid_argument(
            parameter,
            &value,
            &format!("must be at least {minimum}"),
        ));
    }
    Ok(())
}
