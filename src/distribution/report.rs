//! The five probabilities reported for a parameter set

use crate::distribution::parameters::Parameters;
use crate::io::error::Result;
use crate::math::probability::{NumericPolicy, lower_tail, point_probability, upper_tail};
use std::fmt;

/// Exact and cumulative probabilities around the desired success count `k`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Report {
    /// P(X = k)
    pub exact: f64,
    /// P(X < k)
    pub less_than: f64,
    /// P(X ≤ k)
    pub at_most: f64,
    /// P(X > k)
    pub greater_than: f64,
    /// P(X ≥ k)
    pub at_least: f64,
}

impl Report {
    /// Assemble a report from the exact mass and the two inclusive tails
    pub fn from_tails(exact: f64, at_most: f64, at_least: f64) -> Self {
        Self {
            exact,
            less_than: at_most - exact,
            at_most,
            greater_than: at_least - exact,
            at_least,
        }
    }

    /// Evaluate every level of the sample once and derive all five probabilities
    ///
    /// # Errors
    ///
    /// Propagates point probability failures
    pub fn compute(params: &Parameters, policy: NumericPolicy) -> Result<Self> {
        let exact = point_probability(params, params.desired_successes(), policy)?;
        let at_most = lower_tail(params, exact, policy)?;
        let at_least = upper_tail(params, exact, policy)?;

        Ok(Self::from_tails(exact, at_most, at_least))
    }

    /// Evaluate raw counts, reporting all zeros when they do not form a valid set
    ///
    /// # Errors
    ///
    /// Propagates point probability failures for valid input
    pub fn evaluate(
        population_size: u64,
        population_successes: u64,
        sample_size: u64,
        desired_successes: u64,
        policy: NumericPolicy,
    ) -> Result<Self> {
        match Parameters::new(
            population_size,
            population_successes,
            sample_size,
            desired_successes,
        ) {
            Ok(params) => Self::compute(&params, policy),
            Err(err) => {
                log::debug!("{err}; reporting the degenerate result");
                Ok(Self::default())
            }
        }
    }

    /// All five probabilities in display order
    pub const fn values(&self) -> [f64; 5] {
        [
            self.exact,
            self.less_than,
            self.at_most,
            self.greater_than,
            self.at_least,
        ]
    }
}

/// Labels matching [`Report::values`]
pub const LABELS: [&str; 5] = [
    "Chance of exactly desired successes",
    "Chance of less than desired successes",
    "Chance of desired successes or less",
    "Chance of greater than desired successes",
    "Chance of desired successes or greater",
];

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in LABELS.iter().zip(self.values()) {
            writeln!(f, "{label}: {value}")?;
        }
        Ok(())
    }
}
