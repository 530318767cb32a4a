//! Hypergeometric distribution probabilities for draws without replacement
//!
//! Given a population of `N` items holding `K` successes and a sample of `n`
//! items drawn without replacement, the crate computes the probability of
//! exactly `k` successes together with the cumulative tails around `k`.
//! Combination counts are exact, built from a GCD-reduced running product.

#![forbid(unsafe_code)]

/// Parameter sets, reports and distribution tables
pub mod distribution;
/// Command-line surface, input coercion, formatting and error handling
pub mod io;
/// Combinatorics, point probabilities and sampling
pub mod math;

pub use distribution::parameters::Parameters;
pub use distribution::report::Report;
pub use io::error::{HypergeomError, Result};
pub use math::probability::NumericPolicy;
