use bitvec::prelude::*;
use std::fmt;

/// Fixed-size set of flattened `row * width + col` coordinates
///
/// Membership is decided by coordinate value, so two independently computed
/// positions that name the same pixel are the same element.
#[derive(Clone, Debug)]
pub struct CoordinateSet {
    bits: BitVec,
    width: usize,
}

impl CoordinateSet {
    /// Create an empty set covering a `height x width` grid
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            bits: bitvec![0; height * width],
            width,
        }
    }

    /// Insert a coordinate, returning `true` if it was not already present
    ///
    /// Coordinates outside the grid are ignored and report `false`.
    pub fn insert(&mut self, row: usize, col: usize) -> bool {
        let Some(index) = self.index(row, col) else {
            return false;
        };
        !self.bits.replace(index, true)
    }

    /// Test coordinate membership
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.index(row, col)
            .and_then(|index| self.bits.get(index).as_deref().copied())
            .unwrap_or(false)
    }

    /// Test if no coordinates are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count coordinates in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        let index = row.checked_mul(self.width)?.checked_add(col)?;
        (index < self.bits.len()).then_some(index)
    }
}

impl fmt::Display for CoordinateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CoordinateSet({} of {})", self.count(), self.bits.len())
    }
}
