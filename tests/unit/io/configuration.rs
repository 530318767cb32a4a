//! Tests for evaluation constants and defaults

#[cfg(test)]
mod tests {
    use hypergeom::io::configuration::{
        COMMENT_MARKER, DEFAULT_DECIMAL_PLACES, DEFAULT_SEED, DEFAULT_TRIALS, FIELD_SEPARATORS,
        MAX_DECIMAL_PLACES, PROGRESS_BAR_WIDTH, PROGRESS_THRESHOLD, TOTAL_MASS_TOLERANCE,
    };

    // Tests display precision default
    // Verified by changing precision value
    #[test]
    fn test_default_decimal_places() {
        assert_eq!(DEFAULT_DECIMAL_PLACES, 18);
        assert!(DEFAULT_DECIMAL_PLACES <= MAX_DECIMAL_PLACES);
    }

    // Tests total mass tolerance is tight but positive
    // Verified by loosening tolerance
    #[test]
    fn test_total_mass_tolerance() {
        assert!(TOTAL_MASS_TOLERANCE > 0.0);
        assert!(TOTAL_MASS_TOLERANCE <= 1e-9);
    }

    // Tests default seed is fixed
    // Verified by changing seed value
    #[test]
    fn test_default_seed_is_reproducible() {
        assert_eq!(DEFAULT_SEED, 42);
    }

    // Tests default trial count
    // Verified by reducing trial count
    #[test]
    fn test_default_trials() {
        assert_eq!(DEFAULT_TRIALS, 100_000);
    }

    // Tests progress settings
    // Verified by changing width value
    #[test]
    fn test_progress_settings() {
        assert_eq!(PROGRESS_THRESHOLD, 64);
        assert_eq!(PROGRESS_BAR_WIDTH, 40);
    }

    // Tests batch separators never collide with the comment marker or digits
    // Verified by adding a digit separator
    #[test]
    fn test_batch_separators() {
        assert!(!FIELD_SEPARATORS.contains(&COMMENT_MARKER));
        assert!(FIELD_SEPARATORS.iter().all(|ch| !ch.is_ascii_digit()));
    }
}
