//! Tests for batch file parsing

#[cfg(test)]
mod tests {
    use hypergeom::HypergeomError;
    use hypergeom::io::batch::{BatchEntry, parse_batch, read_batch};
    use std::fs;
    use tempfile::TempDir;

    // Tests comments, blank lines and both separators
    // Verified by numbering lines from zero
    #[test]
    fn test_parse_batch_skips_comments() {
        let entries = parse_batch("52 13 5 1\n# comment\n\n10,0,5,0 # trailing\n").unwrap();

        assert_eq!(
            entries,
            vec![
                BatchEntry {
                    line: 1,
                    counts: [52, 13, 5, 1]
                },
                BatchEntry {
                    line: 4,
                    counts: [10, 0, 5, 0]
                },
            ]
        );
    }

    // Tests a short line names its position and field count
    // Verified by ignoring missing fields
    #[test]
    fn test_parse_batch_wrong_field_count() {
        match parse_batch("1 1 1 1\n1 2 3\n") {
            Err(HypergeomError::Parse { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("found 3"));
            }
            other => unreachable!("Expected parse error, got {other:?}"),
        }
    }

    // Tests non-integer and negative fields are rejected
    // Verified by coercing fields leniently
    #[test]
    fn test_parse_batch_bad_field() {
        assert!(matches!(
            parse_batch("1 2 x 4"),
            Err(HypergeomError::Parse { line: 1, .. })
        ));
        assert!(parse_batch("10 -2 3 1").is_err());
    }

    // Tests reading from disk
    // Verified by returning an empty batch on read failure
    #[test]
    fn test_read_batch() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sets.csv");
        fs::write(&path, "20, 7, 5, 2\n").unwrap();

        let entries = read_batch(&path).unwrap();
        assert_eq!(entries.len(), 1);

        let missing = temp_dir.path().join("missing.csv");
        match read_batch(&missing) {
            Err(HypergeomError::FileSystem { path, operation, .. }) => {
                assert_eq!(path, missing);
                assert_eq!(operation, "read");
            }
            other => unreachable!("Expected file system error, got {other:?}"),
        }
    }
}
