//! Tests for `CellSet` membership tracking

#[cfg(test)]
mod tests {
    use gridwalk::algorithm::occupancy::CellSet;

    // Verifies a new set is empty
    // Verified by initializing with all bits set
    #[test]
    fn test_new_set_is_empty() {
        let set = CellSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(!set.contains(0));
    }

    // Tests insertion reports novelty and membership
    // Verified by always returning true from insert
    #[test]
    fn test_insert_and_contains() {
        let mut set = CellSet::new();
        assert!(set.insert(5));
        assert!(!set.insert(5));
        assert!(set.contains(5));
        assert!(!set.contains(4));
        assert_eq!(set.len(), 1);
    }

    // Tests storage grows on demand from an empty set
    // Verified by ignoring indices beyond the current length
    #[test]
    fn test_insert_grows_storage() {
        let mut set = CellSet::new();
        assert!(set.insert(1000));
        assert!(set.contains(1000));
        assert!(!set.contains(999));
        assert!(!set.contains(5000));
    }

    // Tests removal of present and absent cells
    // Verified by decrementing len on absent removal
    #[test]
    fn test_remove() {
        let mut set = CellSet::new();
        for cell in [2, 8, 13] {
            set.insert(cell);
        }
        assert!(set.remove(8));
        assert!(!set.remove(8));
        assert!(!set.remove(400));
        assert_eq!(set.len(), 2);
        assert!(set.contains(2) && set.contains(13));
        assert!(!set.contains(8));
    }

    // Tests a removed cell can be inserted again
    // Verified by leaving the bit set on removal
    #[test]
    fn test_reinsert_after_remove() {
        let mut set = CellSet::new();
        set.insert(7);
        set.remove(7);
        assert!(set.is_empty());
        assert!(set.insert(7));
        assert_eq!(set.len(), 1);
    }
}
