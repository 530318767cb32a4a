//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use hypergeom::io::progress::ProgressManager;

    // Tests an uninitialized manager ignores updates
    // Verified by creating a bar on construction
    #[test]
    fn test_progress_manager_without_bar() {
        let pm = ProgressManager::new();
        pm.advance();
        assert_eq!(pm.position(), 0);
        pm.finish();
    }

    // Tests advancing counts evaluated sets
    // Verified by incrementing by the set count
    #[test]
    fn test_progress_manager_counts_sets() {
        let mut pm = ProgressManager::default();
        pm.initialize(3);
        pm.advance();
        pm.advance();
        assert_eq!(pm.position(), 2);
        pm.finish();
    }
}
