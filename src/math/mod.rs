//! Mathematical utilities for hypergeometric evaluation

/// Greatest common divisors and exact combination counts
pub mod combinatorics;
/// Point mass, cumulative tails and numeric evaluation policies
pub mod probability;
/// Monte-Carlo estimation by repeated sampling
pub mod sampling;
