//! Monte-Carlo estimate of the report by repeated draws without replacement
//!
//! Population items `0..K` are successes and `K..N` failures. Each trial draws
//! `n` distinct indices, so the empirical frequencies converge on the analytic
//! report as the trial count grows.

use crate::distribution::parameters::Parameters;
use crate::distribution::report::Report;
use crate::io::error::{Result, invalid_parameter};
use rand::seq::index;
use rand::{SeedableRng, rngs::StdRng};

/// Empirical report from `trials` seeded samples
///
/// # Errors
///
/// Returns an error if the population does not fit in the platform's `usize`
pub fn simulate(params: &Parameters, trials: u64, seed: u64) -> Result<Report> {
    if trials == 0 {
        return Ok(Report::default());
    }

    let population = to_index(params.population_size(), "population_size")?;
    let sample = to_index(params.sample_size(), "sample_size")?;
    let successes = to_index(params.population_successes(), "population_successes")?;
    let desired = to_index(params.desired_successes(), "desired_successes")?;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut histogram = vec![0_u64; sample + 1];

    for _ in 0..trials {
        let drawn = index::sample(&mut rng, population, sample)
            .iter()
            .filter(|&item| item < successes)
            .count();
        if let Some(bucket) = histogram.get_mut(drawn) {
            *bucket += 1;
        }
    }

    let total = trials as f64;
    let frequency = |range: &[u64]| range.iter().sum::<u64>() as f64 / total;

    let exact = histogram.get(desired).map_or(0.0, |&count| count as f64 / total);
    let at_most = frequency(histogram.get(..=desired).unwrap_or(&[]));
    let at_least = frequency(histogram.get(desired..).unwrap_or(&[]));

    log::debug!("simulated {trials} samples of {sample} from {population} (seed {seed})");
    Ok(Report::from_tails(exact, at_most, at_least))
}

fn to_index(value: u64, parameter: &'static str) -> Result<usize> {
    usize::try_from(value)
        .map_err(|err| invalid_parameter(parameter, &value, &err))
}
