//! Parameter sets and the probabilities derived from them

/// Validated population and sample parameters
pub mod parameters;
/// Exact and cumulative probabilities around the desired count
pub mod report;
/// Probability table across every success count
pub mod table;
