//! Tests for undo and redo bookkeeping

#[cfg(test)]
mod tests {
    use pixelmill::io::history::History;
    use pixelmill::spatial::PixelGrid;

    fn solid(value: u8) -> PixelGrid {
        PixelGrid::from_fn(1, 1, |_, _| [value, value, value])
    }

    // Verifies a new history has no current image
    // Verified by seeding the history with an empty grid
    #[test]
    fn test_new_history_is_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert!(history.current().is_none());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    // Tests undo stops at the base image and redo replays
    // Verified by allowing undo of the base entry
    #[test]
    fn test_undo_redo() {
        let mut history = History::new();
        history.reset(solid(1));
        history.record(solid(2));
        history.record(solid(3));

        assert!(history.undo());
        assert_eq!(history.current(), Some(&solid(2)));
        assert!(history.undo());
        assert_eq!(history.current(), Some(&solid(1)));
        assert!(!history.undo());
        assert_eq!(history.current(), Some(&solid(1)));

        assert!(history.redo());
        assert!(history.redo());
        assert!(!history.redo());
        assert_eq!(history.current(), Some(&solid(3)));
    }

    // Tests a new edit discards undone edits
    // Verified by keeping the redo stack on record
    #[test]
    fn test_record_clears_redo() {
        let mut history = History::new();
        history.reset(solid(1));
        history.record(solid(2));
        history.undo();
        assert!(history.can_redo());

        history.record(solid(4));
        assert!(!history.can_redo());
        assert!(!history.redo());
        assert_eq!(history.current(), Some(&solid(4)));
        assert_eq!(history.len(), 2);
    }

    // Tests reset discards both stacks
    // Verified by appending the base instead of clearing
    #[test]
    fn test_reset() {
        let mut history = History::new();
        history.reset(solid(1));
        history.record(solid(2));
        history.record(solid(3));
        history.undo();

        history.reset(solid(9));
        assert_eq!(history.len(), 1);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.current(), Some(&solid(9)));
    }
}
