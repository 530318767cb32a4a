//! Validated population and sample parameters for a hypergeometric draw

use crate::io::error::{Result, Violation};

/// Population and sample description for one hypergeometric evaluation
///
/// Fields are private so that every value in circulation satisfies
/// `N ≥ K`, `N ≥ n`, `N ≥ k`, `K ≥ k` and `n ≥ k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Parameters {
    population_size: u64,
    population_successes: u64,
    sample_size: u64,
    desired_successes: u64,
}

impl Parameters {
    /// Validate and build a parameter set
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameters` naming the first ordering constraint broken
    pub fn new(
        population_size: u64,
        population_successes: u64,
        sample_size: u64,
        desired_successes: u64,
    ) -> Result<Self> {
        let candidate = Self {
            population_size,
            population_successes,
            sample_size,
            desired_successes,
        };

        match candidate.violation() {
            Some(violation) => Err(violation.into()),
            None => Ok(candidate),
        }
    }

    /// Build a parameter set, collapsing invalid input to [`Parameters::degenerate`]
    pub fn new_or_degenerate(
        population_size: u64,
        population_successes: u64,
        sample_size: u64,
        desired_successes: u64,
    ) -> Self {
        Self::new(
            population_size,
            population_successes,
            sample_size,
            desired_successes,
        )
        .unwrap_or_else(|err| {
            log::debug!("{err}; using the degenerate parameter set");
            Self::degenerate()
        })
    }

    /// The all-zero parameter set
    pub const fn degenerate() -> Self {
        Self {
            population_size: 0,
            population_successes: 0,
            sample_size: 0,
            desired_successes: 0,
        }
    }

    const fn violation(&self) -> Option<Violation> {
        let (population, successes, sample, desired) = (
            self.population_size,
            self.population_successes,
            self.sample_size,
            self.desired_successes,
        );

        if successes > population {
            Some(Violation::SuccessesExceedPopulation {
                successes,
                population,
            })
        } else if sample > population {
            Some(Violation::SampleExceedsPopulation { sample, population })
        } else if desired > population {
            Some(Violation::DesiredExceedsPopulation {
                desired,
                population,
            })
        } else if desired > successes {
            Some(Violation::DesiredExceedsSuccesses { desired, successes })
        } else if desired > sample {
            Some(Violation::DesiredExceedsSample { desired, sample })
        } else {
            None
        }
    }

    /// Total number of items (N)
    pub const fn population_size(&self) -> u64 {
        self.population_size
    }

    /// Success items in the population (K)
    pub const fn population_successes(&self) -> u64 {
        self.population_successes
    }

    /// Items drawn without replacement (n)
    pub const fn sample_size(&self) -> u64 {
        self.sample_size
    }

    /// Target success count (k)
    pub const fn desired_successes(&self) -> u64 {
        self.desired_successes
    }

    /// Failure items in the population (N - K)
    pub const fn population_failures(&self) -> u64 {
        self.population_size - self.population_successes
    }

    /// Failures in a sample that hits the target exactly (n - k)
    pub const fn sample_failures(&self) -> u64 {
        self.sample_size - self.desired_successes
    }

    /// Smallest success count with non-zero probability
    pub const fn min_successes(&self) -> u64 {
        self.sample_size.saturating_sub(self.population_failures())
    }

    /// Largest success count with non-zero probability
    pub const fn max_successes(&self) -> u64 {
        if self.population_successes < self.sample_size {
            self.population_successes
        } else {
            self.sample_size
        }
    }

    /// Expected number of successes `n·K/N`
    pub fn mean(&self) -> f64 {
        if self.population_size == 0 {
            return 0.0;
        }
        self.sample_size as f64 * self.population_successes as f64 / self.population_size as f64
    }

    /// Variance of the success count `n·(K/N)·(F/N)·(N-n)/(N-1)`
    pub fn variance(&self) -> f64 {
        if self.population_size <= 1 {
            return 0.0;
        }

        let population = self.population_size as f64;
        let success_ratio = self.population_successes as f64 / population;
        let failure_ratio = self.population_failures() as f64 / population;
        let correction =
            (self.population_size - self.sample_size) as f64 / (population - 1.0);

        self.sample_size as f64 * success_ratio * failure_ratio * correction
    }
}
