//! Conversion between pixel grids and `image` buffers, plus file load and save
//!
//! Decoding and encoding are delegated entirely to the `image` crate. Any
//! alpha channel in a loaded file is discarded.

use image::RgbImage;
use std::path::Path;

use crate::io::error::{ImagingError, Result, invalid_argument};
use crate::spatial::PixelGrid;

/// Convert a grid into an `image` RGB buffer
///
/// # Errors
///
/// Returns `InvalidArgument` if a dimension does not fit in `u32`
pub fn to_rgb_image(grid: &PixelGrid) -> Result<RgbImage> {
    let (height, width) = grid.dimensions();
    let to_u32 = |parameter: &'static str, value: usize| {
        u32::try_from(value).map_err(|_overflow| {
            invalid_argument(parameter, &value, &"dimension exceeds u32 range")
        })
    };
    let image_width = to_u32("width", width)?;
    let image_height = to_u32("height", height)?;

    Ok(RgbImage::from_fn(image_width, image_height, |x, y| {
        image::Rgb(grid.pixel(y as usize, x as usize).unwrap_or_default())
    }))
}

/// Convert an `image` RGB buffer into a grid
pub fn from_rgb_image(image: &RgbImage) -> PixelGrid {
    let (width, height) = image.dimensions();
    PixelGrid::from_fn(height as usize, width as usize, |row, col| {
        image
            .get_pixel_checked(col as u32, row as u32)
            .map_or([0, 0, 0], |pixel| pixel.0)
    })
}

/// Decode an image file into a grid
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or read
/// - The file is not in a format the `image` crate can decode
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<PixelGrid> {
    let path_buf = path.as_ref().to_path_buf();
    let decoded = image::open(&path_buf).map_err(|e| ImagingError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    Ok(from_rgb_image(&decoded.to_rgb8()))
}

/// Encode a grid to a file, choosing the format from the extension
///
/// # Errors
///
/// Returns an error if:
/// - A dimension does not fit in `u32`
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn save_image<P: AsRef<Path>>(grid: &PixelGrid, path: P) -> Result<()> {
    let output_path = path.as_ref();
    let buffer = to_rgb_image(grid)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ImagingError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    buffer
        .save(output_path)
        .map_err(|e| ImagingError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
