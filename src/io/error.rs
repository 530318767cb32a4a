//! Error types for parameter validation, evaluation and batch input

use std::fmt;
use std::path::PathBuf;

/// Ordering constraint broken by a candidate parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// More successes in the population than items
    SuccessesExceedPopulation {
        /// Successes in the population (K)
        successes: u64,
        /// Population size (N)
        population: u64,
    },
    /// Sample drawn is larger than the population
    SampleExceedsPopulation {
        /// Sample size (n)
        sample: u64,
        /// Population size (N)
        population: u64,
    },
    /// Desired successes larger than the population
    DesiredExceedsPopulation {
        /// Desired successes (k)
        desired: u64,
        /// Population size (N)
        population: u64,
    },
    /// Desired successes larger than the successes available
    DesiredExceedsSuccesses {
        /// Desired successes (k)
        desired: u64,
        /// Successes in the population (K)
        successes: u64,
    },
    /// Desired successes larger than the sample
    DesiredExceedsSample {
        /// Desired successes (k)
        desired: u64,
        /// Sample size (n)
        sample: u64,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SuccessesExceedPopulation {
                successes,
                population,
            } => write!(
                f,
                "population successes {successes} exceed population size {population}"
            ),
            Self::SampleExceedsPopulation { sample, population } => {
                write!(f, "sample size {sample} exceeds population size {population}")
            }
            Self::DesiredExceedsPopulation {
                desired,
                population,
            } => write!(
                f,
                "desired successes {desired} exceed population size {population}"
            ),
            Self::DesiredExceedsSuccesses { desired, successes } => write!(
                f,
                "desired successes {desired} exceed population successes {successes}"
            ),
            Self::DesiredExceedsSample { desired, sample } => {
                write!(f, "desired successes {desired} exceed sample size {sample}")
            }
        }
    }
}

/// Main error type for all hypergeometric operations
#[derive(Debug)]
pub enum HypergeomError {
    /// Parameter set breaks one of the ordering constraints
    InvalidParameters {
        /// The first constraint found to be broken
        violation: Violation,
    },

    /// Option or argument validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Batch input line could not be read as a parameter set
    Parse {
        /// One-based line number in the input
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for HypergeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameters { violation } => {
                write!(f, "Invalid parameter set: {violation}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Parse { line, reason } => {
                write!(f, "Malformed input on line {line}: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for HypergeomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for hypergeometric results
pub type Result<T> = std::result::Result<T, HypergeomError>;

impl From<Violation> for HypergeomError {
    fn from(violation: Violation) -> Self {
        Self::InvalidParameters { violation }
    }
}

impl From<std::io::Error> for HypergeomError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> HypergeomError {
    HypergeomError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> HypergeomError {
    HypergeomError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
