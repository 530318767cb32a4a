//! Full probability table over every possible success count of a sample

use crate::distribution::parameters::Parameters;
use crate::io::error::Result;
use crate::math::probability::{NumericPolicy, point_probability};

/// Point and cumulative probabilities for one success count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow {
    /// Success count this row describes
    pub successes: u64,
    /// P(X = successes)
    pub exact: f64,
    /// P(X ≤ successes)
    pub at_most: f64,
    /// P(X ≥ successes)
    pub at_least: f64,
}

/// Distribution of the success count for a fixed population and sample
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionTable {
    /// One row per success count from zero to the sample size
    pub rows: Vec<TableRow>,
    /// Expected success count
    pub mean: f64,
    /// Variance of the success count
    pub variance: f64,
    /// Smallest and largest success counts with non-zero probability
    pub support: (u64, u64),
}

impl DistributionTable {
    /// Tabulate the distribution; the desired count of `params` is ignored
    ///
    /// # Errors
    ///
    /// Propagates point probability failures
    pub fn compute(params: &Parameters, policy: NumericPolicy) -> Result<Self> {
        let masses = (0..=params.sample_size())
            .map(|level| point_probability(params, level, policy))
            .collect::<Result<Vec<_>>>()?;

        let mut at_least = vec![0.0; masses.len()];
        let mut running = 0.0;
        for (slot, mass) in at_least.iter_mut().zip(&masses).rev() {
            running += mass;
            *slot = running;
        }

        let mut running = 0.0;
        let rows = masses
            .iter()
            .zip(at_least)
            .zip(0_u64..)
            .map(|((&exact, at_least), successes)| {
                running += exact;
                TableRow {
                    successes,
                    exact,
                    at_most: running,
                    at_least,
                }
            })
            .collect();

        Ok(Self {
            rows,
            mean: params.mean(),
            variance: params.variance(),
            support: (params.min_successes(), params.max_successes()),
        })
    }

    /// Sum of every point mass in the table
    pub fn total_mass(&self) -> f64 {
        self.rows.iter().map(|row| row.exact).sum()
    }
}
