//! Tests for 3x3 color matrices and the greyscale and sepia presets

#[cfg(test)]
mod tests {
    use pixelmill::filters::color::{ColorMatrix, apply_color_matrix, greyscale, sepia};
    use pixelmill::filters::{GREYSCALE, SEPIA};
    use pixelmill::spatial::PixelGrid;

    // Tests matrices that are not exactly 3x3 are rejected
    // Verified by padding short rows with zeros
    #[test]
    fn test_matrix_shape_validation() {
        assert!(ColorMatrix::new(&[vec![1.0, 0.0], vec![0.0, 1.0]]).is_err());
        assert!(ColorMatrix::new(&[vec![1.0, 0.0, 0.0], vec![0.0, 1.0], vec![0.0; 3]]).is_err());
        assert!(ColorMatrix::new(&[vec![0.0; 3], vec![0.0; 3], vec![0.0; 3], vec![0.0; 3]]).is_err());

        let matrix = ColorMatrix::new(&[vec![0.0, 0.0, 1.0], vec![0.0, 1.0, 0.0], vec![1.0, 0.0, 0.0]])
            .unwrap();
        assert_eq!(matrix.rows()[0], [0.0, 0.0, 1.0]);
    }

    // Tests luma weights on pure red
    // Verified by using the green weight for the red channel
    #[test]
    fn test_greyscale_red() {
        assert_eq!(GREYSCALE.transform([255, 0, 0]), [54, 54, 54]);
        assert_eq!(GREYSCALE.transform([255, 255, 255]), [255, 255, 255]);
    }

    // Tests sepia rounding and clamping
    // Verified by truncating instead of rounding
    #[test]
    fn test_sepia_values() {
        assert_eq!(SEPIA.transform([100, 50, 20]), [82, 73, 57]);
        assert_eq!(SEPIA.transform([255, 255, 255]), [255, 255, 239]);
    }

    // Tests a channel swap matrix applied over a grid
    // Verified by multiplying by columns instead of rows
    #[test]
    fn test_apply_swap_matrix() {
        let swap = ColorMatrix::from_rows([[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]]);
        let grid = PixelGrid::from_rows(&[vec![[1, 2, 3], [40, 50, 60]]]).unwrap();

        let swapped = apply_color_matrix(&grid, &swap);
        assert_eq!(swapped.to_rows(), vec![vec![[3, 2, 1], [60, 50, 40]]]);
    }

    // Tests the grid helpers match per-pixel transforms
    // Verified by applying sepia in greyscale()
    #[test]
    fn test_grid_helpers() {
        let grid = PixelGrid::from_fn(3, 4, |row, col| [row as u8 * 60, col as u8 * 50, 90]);

        let grey = greyscale(&grid);
        let toned = sepia(&grid);
        for row in 0..3 {
            for col in 0..4 {
                let source = grid.pixel(row, col).unwrap();
                assert_eq!(grey.pixel(row, col), Some(GREYSCALE.transform(source)));
                assert_eq!(toned.pixel(row, col), Some(SEPIA.transform(source)));
            }
        }
        assert_eq!(grey.dimensions(), (3, 4));
    }
}
