//! Tests for the 8x8 checkerboard generator

#[cfg(test)]
mod tests {
    use pixelmill::ImagingError;
    use pixelmill::patterns::checkerboard::{BOARD_SQUARES, checkerboard};
    use pixelmill::patterns::palette::{BLACK, WHITE};

    // Tests one-pixel squares alternate starting with white
    // Verified by starting the board with black
    #[test]
    fn test_unit_squares() {
        let board = checkerboard(1).unwrap();
        assert_eq!(board.dimensions(), (BOARD_SQUARES, BOARD_SQUARES));
        assert_eq!(board.pixel(0, 0), Some(WHITE));
        assert_eq!(board.pixel(0, 1), Some(BLACK));
        assert_eq!(board.pixel(1, 0), Some(BLACK));
        assert_eq!(board.pixel(1, 1), Some(WHITE));
        assert_eq!(board.pixel(7, 7), Some(WHITE));
    }

    // Tests larger squares cover whole blocks of pixels
    // Verified by dividing by the board size instead of the square size
    #[test]
    fn test_wide_squares() {
        let board = checkerboard(3).unwrap();
        assert_eq!(board.dimensions(), (24, 24));
        assert_eq!(board.pixel(2, 2), Some(WHITE));
        assert_eq!(board.pixel(2, 3), Some(BLACK));
        assert_eq!(board.pixel(3, 3), Some(WHITE));
        assert_eq!(board.pixel(23, 0), Some(BLACK));
    }

    // Tests a zero square size is rejected
    // Verified by removing the lower bound check
    #[test]
    fn test_zero_square_size() {
        assert!(matches!(
            checkerboard(0),
            Err(ImagingError::InvalidArgument {
                parameter: "square_size",
                ..
            })
        ));
    }
}
