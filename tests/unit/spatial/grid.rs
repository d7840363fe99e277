//! Tests for `PixelGrid` construction, access and copying

#[cfg(test)]
mod tests {
    use ndarray::Array3;
    use pixelmill::ImagingError;
    use pixelmill::spatial::PixelGrid;

    // Tests rows are laid out row-major with the expected dimensions
    // Verified by swapping row and column in the from_rows lookup
    #[test]
    fn test_from_rows_layout() {
        let grid = PixelGrid::from_rows(&[
            vec![[1, 2, 3], [4, 5, 6], [7, 8, 9]],
            vec![[10, 11, 12], [13, 14, 15], [16, 17, 18]],
        ])
        .unwrap();

        assert_eq!(grid.dimensions(), (2, 3));
        assert_eq!(grid.pixel(0, 2), Some([7, 8, 9]));
        assert_eq!(grid.pixel(1, 0), Some([10, 11, 12]));
    }

    // Tests ragged rows are rejected
    // Verified by removing the row length check
    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let result = PixelGrid::from_rows(&[vec![[0, 0, 0], [0, 0, 0]], vec![[0, 0, 0]]]);
        assert!(matches!(
            result,
            Err(ImagingError::InvalidArgument {
                parameter: "rows",
                ..
            })
        ));
    }

    // Tests an empty row list yields a 0x0 grid
    // Verified by making width default to 1
    #[test]
    fn test_from_rows_empty() {
        let grid = PixelGrid::from_rows(&[]).unwrap();
        assert_eq!(grid.dimensions(), (0, 0));
        assert!(grid.is_empty());
        assert!(grid.to_packed_rgb().is_empty());
    }

    // Tests arrays without exactly three channels are rejected
    // Verified by accepting any channel count
    #[test]
    fn test_from_array_checks_channels() {
        assert!(PixelGrid::from_array(Array3::zeros((2, 2, 4))).is_err());

        let grid = PixelGrid::from_array(Array3::from_elem((2, 3, 3), 9)).unwrap();
        assert_eq!(grid.pixel(1, 2), Some([9, 9, 9]));
    }

    // Tests out-of-range coordinates return None
    // Verified by clamping coordinates into range
    #[test]
    fn test_pixel_out_of_bounds() {
        let grid = PixelGrid::from_fn(2, 2, |_, _| [1, 1, 1]);
        assert_eq!(grid.pixel(2, 0), None);
        assert_eq!(grid.pixel(0, 2), None);
    }

    // Tests copies handed out do not alias the grid
    // Verified by returning a shared view instead of a clone
    #[test]
    fn test_copies_are_independent() {
        let grid = PixelGrid::from_fn(2, 2, |row, col| [row as u8, col as u8, 0]);

        let mut rows = grid.to_rows();
        rows[0][0] = [255, 255, 255];
        let mut array = grid.to_array();
        array[[1, 1, 0]] = 200;

        assert_eq!(grid.pixel(0, 0), Some([0, 0, 0]));
        assert_eq!(grid.pixel(1, 1), Some([1, 1, 0]));
        assert_eq!(PixelGrid::from_rows(&grid.to_rows()).unwrap(), grid);
    }

    // Tests packing produces 0xRRGGBB words in row-major order
    // Verified by packing channels in BGR order
    #[test]
    fn test_to_packed_rgb() {
        let grid =
            PixelGrid::from_rows(&[vec![[1, 2, 3], [255, 0, 0]], vec![[0, 0, 255], [0, 128, 0]]])
                .unwrap();

        assert_eq!(
            grid.to_packed_rgb(),
            vec![0x01_02_03, 0xFF_00_00, 0x00_00_FF, 0x00_80_00]
        );
    }

    // Tests size helpers agree with the constructor arguments
    // Verified by returning width from height
    #[test]
    fn test_size_helpers() {
        let grid = PixelGrid::from_fn(4, 7, |_, _| [0, 0, 0]);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.pixel_count(), 28);
        assert!(!grid.is_empty());
    }
}
