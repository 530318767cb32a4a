//! Tests for parameter validation, the degenerate fallback and summary moments

#[cfg(test)]
mod tests {
    use hypergeom::io::error::Violation;
    use hypergeom::{HypergeomError, Parameters};

    fn violation_of(result: Result<Parameters, HypergeomError>) -> Violation {
        match result {
            Err(HypergeomError::InvalidParameters { violation }) => violation,
            other => unreachable!("Expected InvalidParameters, got {other:?}"),
        }
    }

    // Tests a valid set keeps its counts and derived failures
    // Verified by swapping the derived subtractions
    #[test]
    fn test_valid_parameters() {
        let params = Parameters::new(52, 13, 5, 1).unwrap();

        assert_eq!(params.population_size(), 52);
        assert_eq!(params.population_successes(), 13);
        assert_eq!(params.sample_size(), 5);
        assert_eq!(params.desired_successes(), 1);
        assert_eq!(params.population_failures(), 39);
        assert_eq!(params.sample_failures(), 4);
    }

    // Tests each ordering constraint is named when broken
    // Verified by reordering the constraint checks
    #[test]
    fn test_each_violation_is_reported() {
        assert_eq!(
            violation_of(Parameters::new(3, 5, 1, 0)),
            Violation::SuccessesExceedPopulation {
                successes: 5,
                population: 3
            }
        );
        assert_eq!(
            violation_of(Parameters::new(3, 2, 4, 0)),
            Violation::SampleExceedsPopulation {
                sample: 4,
                population: 3
            }
        );
        assert_eq!(
            violation_of(Parameters::new(3, 3, 3, 4)),
            Violation::DesiredExceedsPopulation {
                desired: 4,
                population: 3
            }
        );
        assert_eq!(
            violation_of(Parameters::new(10, 2, 5, 3)),
            Violation::DesiredExceedsSuccesses {
                desired: 3,
                successes: 2
            }
        );
        assert_eq!(
            violation_of(Parameters::new(10, 6, 2, 3)),
            Violation::DesiredExceedsSample {
                desired: 3,
                sample: 2
            }
        );
    }

    // Tests invalid counts collapse to the all-zero set
    // Verified by keeping the caller's counts on failure
    #[test]
    fn test_new_or_degenerate() {
        assert_eq!(
            Parameters::new_or_degenerate(3, 5, 1, 0),
            Parameters::degenerate()
        );
        assert_eq!(
            Parameters::new_or_degenerate(10, 5, 3, 2),
            Parameters::new(10, 5, 3, 2).unwrap()
        );

        let zero = Parameters::degenerate();
        assert_eq!(zero.population_size(), 0);
        assert_eq!(zero.population_successes(), 0);
        assert_eq!(zero.sample_size(), 0);
        assert_eq!(zero.desired_successes(), 0);
        assert_eq!(zero, Parameters::default());
    }

    // Tests support bounds for crowded and sparse populations
    // Verified by dropping the saturating subtraction
    #[test]
    fn test_support_bounds() {
        let crowded = Parameters::new(10, 7, 6, 3).unwrap();
        assert_eq!(crowded.min_successes(), 3);
        assert_eq!(crowded.max_successes(), 6);

        let sparse = Parameters::new(52, 4, 5, 0).unwrap();
        assert_eq!(sparse.min_successes(), 0);
        assert_eq!(sparse.max_successes(), 4);
    }

    // Tests mean and variance for a five card hand of hearts
    // Verified by omitting the finite population correction
    #[test]
    fn test_moments() {
        let params = Parameters::new(52, 13, 5, 0).unwrap();
        assert!((params.mean() - 1.25).abs() < 1e-12);
        assert!((params.variance() - 0.863_970_588_235_294_2).abs() < 1e-12);

        assert!(Parameters::degenerate().mean().abs() < f64::EPSILON);
        assert!(Parameters::new(1, 1, 1, 1).unwrap().variance().abs() < f64::EPSILON);
    }

    // Tests violation messages name the offending counts
    // Verified by omitting values from the message
    #[test]
    fn test_violation_message() {
        let err = Parameters::new(3, 5, 1, 0).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("population successes 5"));
        assert!(message.contains("population size 3"));
    }
}
