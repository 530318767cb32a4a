//! Reading parameter sets from batch files, one set per line

use crate::io::configuration::{COMMENT_MARKER, FIELD_SEPARATORS};
use crate::io::error::{HypergeomError, Result};
use std::path::Path;

/// One parameter set read from a batch file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchEntry {
    /// One-based line number the set came from
    pub line: usize,
    /// Counts `N K n k` in order
    pub counts: [u64; 4],
}

/// Read every parameter set in the file at `path`
///
/// # Errors
///
/// Returns a file system error if the file cannot be read, or a parse error
/// naming the first malformed line
pub fn read_batch(path: &Path) -> Result<Vec<BatchEntry>> {
    let content = std::fs::read_to_string(path).map_err(|source| HypergeomError::FileSystem {
        path: path.to_path_buf(),
        operation: "read",
        source,
    })?;

    parse_batch(&content)
}

/// Parse batch text; blank lines and `#` comments are skipped
///
/// # Errors
///
/// Returns a parse error naming the first malformed line
pub fn parse_batch(content: &str) -> Result<Vec<BatchEntry>> {
    let mut entries = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        let body = raw.split(COMMENT_MARKER).next().unwrap_or_default().trim();
        if body.is_empty() {
            continue;
        }

        entries.push(BatchEntry {
            line,
            counts: parse_counts(body, line)?,
        });
    }

    Ok(entries)
}

fn parse_counts(body: &str, line: usize) -> Result<[u64; 4]> {
    let fields: Vec<&str> = body
        .split(FIELD_SEPARATORS)
        .filter(|field| !field.is_empty())
        .collect();

    let [population, successes, sample, desired] = fields.as_slice() else {
        return Err(HypergeomError::Parse {
            line,
            reason: format!("expected 4 counts, found {}", fields.len()),
        });
    };

    let parse = |field: &str| {
        field.parse::<u64>().map_err(|err| HypergeomError::Parse {
            line,
            reason: format!("'{field}' is not a non-negative integer: {err}"),
        })
    };

    Ok([
        parse(*population)?,
        parse(*successes)?,
        parse(*sample)?,
        parse(*desired)?,
    ])
}
