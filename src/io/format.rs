//! Fixed-precision rendering of probabilities for display

use crate::io::configuration::MAX_DECIMAL_PLACES;
use crate::io::error::{Result, invalid_parameter};

/// Round to `places` decimals, then print the shortest decimal for the rounded value
///
/// Trailing zeros vanish, so `0.25` stays `0.25` and `1.0` prints as `1`.
pub fn format_probability(value: f64, places: usize) -> String {
    let rounded = format!("{value:.places$}");
    // + 0.0 folds -0 into 0
    rounded
        .parse::<f64>()
        .map_or(rounded, |parsed| (parsed + 0.0).to_string())
}

/// Parse and bound-check the decimal places option
///
/// # Errors
///
/// Returns an invalid parameter error for non-numeric or oversized values
pub fn parse_decimal_places(raw: &str) -> Result<usize> {
    let places = raw
        .trim()
        .parse::<usize>()
        .map_err(|err| invalid_parameter("places", &raw, &err))?;

    if places > MAX_DECIMAL_PLACES {
        return Err(invalid_parameter(
            "places",
            &raw,
            &format!("must be at most {MAX_DECIMAL_PLACES}"),
        ));
    }

    Ok(places)
}
