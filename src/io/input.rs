//! Lenient coercion of user-typed counts
//!
//! Reads the leading integer of the text. Negative values and text without a
//! leading integer become zero; values past `u64::MAX` saturate.

/// Coerce raw text into a non-negative count
pub fn coerce_count(raw: &str) -> u64 {
    let trimmed = raw.trim();
    if trimmed.starts_with('-') {
        return 0;
    }

    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits = unsigned
        .split(|c: char| !c.is_ascii_digit())
        .next()
        .unwrap_or_default();

    if digits.is_empty() {
        return 0;
    }

    digits.parse().unwrap_or(u64::MAX)
}

/// Coerce the four counts `N K n k` in order
pub fn coerce_counts(raw: [&str; 4]) -> [u64; 4] {
    raw.map(coerce_count)
}
