//! Hypergeometric point mass and cumulative tails
//!
//! The default evaluation multiplies one ratio per drawn item,
//! `K/N · (K-1)/(N-1) · …` for the successes followed by `F/N' · (F-1)/(N'-1) · …`
//! for the failures, and scales the product by `C(n, k)`. That keeps every
//! intermediate in `[0, 1]` instead of building `K!`, `F!` or `N!`, at the cost of
//! rounding accumulated over `n` multiplications. [`NumericPolicy`] selects a
//! log-space or exact rational evaluation when that rounding matters.

use crate::distribution::parameters::Parameters;
use crate::io::error::{Result, computation_error};
use crate::math::combinatorics::{ln_ncr, ncr, ncr_big};
use num::{BigInt, BigRational, ToPrimitive};

/// Arithmetic used to evaluate a single point mass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericPolicy {
    /// Incremental product of draw ratios scaled by `C(n, k)`
    #[default]
    Multiplicative,
    /// Sum of log combination counts with a single exponentiation
    LogSpace,
    /// Exact rational quotient converted to `f64` once
    Exact,
}

/// Probability of exactly `successes` successes in the sample
///
/// Levels outside the support, including levels above the sample size, give zero.
///
/// # Errors
///
/// Returns a computation error if an exact quotient cannot be represented as `f64`
pub fn point_probability(
    params: &Parameters,
    successes: u64,
    policy: NumericPolicy,
) -> Result<f64> {
    let sample = params.sample_size();
    if successes > sample
        || successes > params.population_successes()
        || sample - successes > params.population_failures()
    {
        return Ok(0.0);
    }

    let probability = match policy {
        NumericPolicy::Multiplicative => multiplicative(params, successes),
        NumericPolicy::LogSpace => log_space(params, successes),
        NumericPolicy::Exact => exact(params, successes)?,
    };

    log::trace!("P(X = {successes}) = {probability} under {policy:?}");
    Ok(probability)
}

/// Probability of `k` or more successes, where `k` is the desired count
///
/// # Errors
///
/// Propagates point probability failures
pub fn at_least(params: &Parameters, policy: NumericPolicy) -> Result<f64> {
    let exact = point_probability(params, params.desired_successes(), policy)?;
    upper_tail(params, exact, policy)
}

/// Probability of `k` or fewer successes, where `k` is the desired count
///
/// # Errors
///
/// Propagates point probability failures
pub fn at_most(params: &Parameters, policy: NumericPolicy) -> Result<f64> {
    let exact = point_probability(params, params.desired_successes(), policy)?;
    lower_tail(params, exact, policy)
}

/// Adds the mass of every level from `k + 1` up to the sample size onto `exact`
pub(crate) fn upper_tail(params: &Parameters, exact: f64, policy: NumericPolicy) -> Result<f64> {
    (params.desired_successes() + 1..=params.sample_size()).try_fold(exact, |sum, level| {
        Ok(sum + point_probability(params, level, policy)?)
    })
}

/// Adds the mass of every level from `k - 1` down to zero onto `exact`
pub(crate) fn lower_tail(params: &Parameters, exact: f64, policy: NumericPolicy) -> Result<f64> {
    (0..params.desired_successes())
        .rev()
        .try_fold(exact, |sum, level| {
            Ok(sum + point_probability(params, level, policy)?)
        })
}

fn multiplicative(params: &Parameters, successes: u64) -> f64 {
    let sample = params.sample_size();
    let ratios = draw_ratios(params, successes);

    match ncr::<u128>(u128::from(sample), u128::from(successes)) {
        Some(arrangements) => ratios.product::<f64>() * arrangements as f64,
        None => {
            // The ratio product underflows about where C(n, k) overflows, so
            // both factors stay in log space until the final exponentiation.
            log::debug!("C({sample}, {successes}) overflows u128; using log space");
            (ratios.map(f64::ln).sum::<f64>() + ln_ncr(sample, successes)).exp()
        }
    }
}

/// One ratio per drawn item: the `k` successes first, then the `n - k` failures
fn draw_ratios(params: &Parameters, successes: u64) -> impl Iterator<Item = f64> {
    let population = params.population_size() as f64;
    let population_successes = params.population_successes() as f64;
    let population_failures = params.population_failures() as f64;
    let failures = params.sample_size() - successes;

    let success_draws =
        (0..successes).map(move |i| (population_successes - i as f64) / (population - i as f64));
    let failure_draws = (0..failures).map(move |j| {
        let drawn = (successes + j) as f64;
        (population_failures - j as f64) / (population - drawn)
    });
    success_draws.chain(failure_draws)
}

fn log_space(params: &Parameters, successes: u64) -> f64 {
    let sample = params.sample_size();
    let ln_mass = ln_ncr(params.population_successes(), successes)
        + ln_ncr(params.population_failures(), sample - successes)
        - ln_ncr(params.population_size(), sample);
    ln_mass.exp()
}

fn exact(params: &Parameters, successes: u64) -> Result<f64> {
    let sample = params.sample_size();
    let favourable = ncr_big(params.population_successes(), successes)
        * ncr_big(params.population_failures(), sample - successes);
    let total = ncr_big(params.population_size(), sample);

    let ratio = BigRational::new(BigInt::from(favourable), BigInt::from(total));
    ratio
        .to_f64()
        .filter(|value| value.is_finite())
        .ok_or_else(|| computation_error("exact point probability", &ratio))
}
