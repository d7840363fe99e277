//! Undo and redo bookkeeping for a sequence of edits
//!
//! The undo stack always ends with the current image. Its first entry is the
//! base image of the session and cannot be undone.

use crate::spatial::PixelGrid;

/// Linear edit history of pixel grids
#[derive(Debug, Clone, Default)]
pub struct History {
    undo_stack: Vec<PixelGrid>,
    redo_stack: Vec<PixelGrid>,
}

impl History {
    /// Create an empty history
    pub const fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Discard everything and start over from `base`
    pub fn reset(&mut self, base: PixelGrid) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.undo_stack.push(base);
    }

    /// Make `grid` the current image
    ///
    /// Recording a new edit abandons any undone edits.
    pub fn record(&mut self, grid: PixelGrid) {
        self.redo_stack.clear();
        self.undo_stack.push(grid);
    }

    /// Step back one edit, returning `false` if already at the base image
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        if let Some(current) = self.undo_stack.pop() {
            self.redo_stack.push(current);
        }
        true
    }

    /// Re-apply the most recently undone edit, returning `false` if there is none
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        self.undo_stack.push(next);
        true
    }

    /// Current image, if any has been recorded
    pub fn current(&self) -> Option<&PixelGrid> {
        self.undo_stack.last()
    }

    /// Check whether an edit can be undone
    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    /// Check whether an undone edit can be re-applied
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of images on the undo stack, including the current one
    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Check whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }
}
