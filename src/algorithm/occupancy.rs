use bitvec::prelude::*;

use crate::spatial::CellIndex;

/// Growable bitset of occupied cell indices
///
/// Provides O(1) membership testing for the uniqueness check of the
/// sequence sampler. Storage grows on insertion, so the set needs no
/// knowledge of the grid size.
#[derive(Clone, Debug, Default)]
pub struct CellSet {
    bits: BitVec,
    len: usize,
}

impl CellSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a cell index
    ///
    /// Returns `false` if the index was already present
    pub fn insert(&mut self, cell: CellIndex) -> bool {
        if cell >= self.bits.len() {
            self.bits.resize(cell + 1, false);
        }
        match self.bits.get_mut(cell) {
            Some(mut bit) if !*bit => {
                *bit = true;
                self.len += 1;
                true
            }
            _ => false,
        }
    }

    /// Remove a cell index
    ///
    /// Returns `false` if the index was not present
    pub fn remove(&mut self, cell: CellIndex) -> bool {
        match self.bits.get_mut(cell) {
            Some(mut bit) if *bit => {
                *bit = false;
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    /// Test cell membership
    pub fn contains(&self, cell: CellIndex) -> bool {
        self.bits.get(cell).as_deref() == Some(&true)
    }

    /// Test if no cells are present
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Count cells in the set
    pub const fn len(&self) -> usize {
        self.len
    }
}

