//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use gridwalk::io::progress::ProgressManager;

    // Tests single sets never draw a bar
    // Verified by lowering the batch threshold to one
    #[test]
    fn test_single_set_hidden() {
        let pm = ProgressManager::new(1, true);
        assert!(!pm.is_visible());
    }

    // Tests quiet runs never draw a bar
    // Verified by ignoring the visible flag
    #[test]
    fn test_quiet_batch_hidden() {
        let pm = ProgressManager::new(5, false);
        assert!(!pm.is_visible());
    }

    // Tests batches draw a bar when visible
    // Verified by always hiding the bar
    #[test]
    fn test_batch_visible() {
        let pm = ProgressManager::new(3, true);
        assert!(pm.is_visible());
        pm.finish();
    }

    // Tests completed and partial sets are counted separately
    // Verified by counting every set as partial
    #[test]
    fn test_record_counts() {
        let mut pm = ProgressManager::new(4, true);
        pm.record_set(true);
        pm.record_set(false);
        pm.record_set(true);
        pm.record_set(false);

        assert_eq!(pm.completed(), 4);
        assert_eq!(pm.partial(), 2);
        pm.finish();
    }
}
