//! Command-line interface for evaluating, tabulating and simulating draws

use crate::distribution::parameters::Parameters;
use crate::distribution::report::{LABELS, Report};
use crate::distribution::table::DistributionTable;
use crate::io::batch::read_batch;
use crate::io::configuration::{
    DEFAULT_DECIMAL_PLACES, DEFAULT_SEED, DEFAULT_TRIALS, PROGRESS_THRESHOLD,
};
use crate::io::error::Result;
use crate::io::format::{format_probability, parse_decimal_places};
use crate::io::input::{coerce_count, coerce_counts};
use crate::io::progress::ProgressManager;
use crate::math::probability::NumericPolicy;
use crate::math::sampling::simulate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hypergeom")]
#[command(
    author,
    version,
    about = "Hypergeometric probabilities for draws without replacement"
)]
/// Command-line arguments for the probability tool
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub operation: Operation,

    /// Log evaluation detail to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Operations offered by the tool
#[derive(Subcommand)]
pub enum Operation {
    /// Probabilities of exactly, fewer, at most, more and at least k successes
    Eval {
        /// Population and sample counts
        #[command(flatten)]
        counts: Counts,
        /// Precision and evaluation method
        #[command(flatten)]
        output: OutputOptions,
    },

    /// Probability table over every success count of the sample
    Table {
        /// Population size (N)
        #[arg(allow_negative_numbers = true)]
        population: String,
        /// Successes in the population (K)
        #[arg(allow_negative_numbers = true)]
        successes: String,
        /// Sample size (n)
        #[arg(allow_negative_numbers = true)]
        sample: String,
        /// Precision and evaluation method
        #[command(flatten)]
        output: OutputOptions,
    },

    /// Evaluate every parameter set in a file, one `N K n k` set per line
    Batch {
        /// File of parameter sets
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Precision and evaluation method
        #[command(flatten)]
        output: OutputOptions,
        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Estimate the probabilities by repeated random draws
    Simulate {
        /// Population and sample counts
        #[command(flatten)]
        counts: Counts,
        /// Number of simulated samples
        #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
        trials: u64,
        /// Random seed for reproducible estimates
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,
        /// Decimal places to round to
        #[arg(short, long, default_value_t = DEFAULT_DECIMAL_PLACES, value_parser = parse_decimal_places)]
        places: usize,
    },
}

/// The four counts of a parameter set as typed; coerced before use
#[derive(Args)]
pub struct Counts {
    /// Population size (N)
    #[arg(allow_negative_numbers = true)]
    pub population: String,
    /// Successes in the population (K)
    #[arg(allow_negative_numbers = true)]
    pub successes: String,
    /// Sample size (n)
    #[arg(allow_negative_numbers = true)]
    pub sample: String,
    /// Desired successes in the sample (k)
    #[arg(allow_negative_numbers = true)]
    pub desired: String,
}

impl Counts {
    /// Counts `N K n k` with negative or non-numeric text read as zero
    pub fn coerced(&self) -> [u64; 4] {
        coerce_counts([
            self.population.as_str(),
            self.successes.as_str(),
            self.sample.as_str(),
            self.desired.as_str(),
        ])
    }
}

/// Display precision and numeric method shared by the evaluating commands
#[derive(Args)]
pub struct OutputOptions {
    /// Decimal places to round to
    #[arg(short, long, default_value_t = DEFAULT_DECIMAL_PLACES, value_parser = parse_decimal_places)]
    pub places: usize,

    /// Arithmetic used for each point probability
    #[arg(short, long, value_enum, default_value_t = Method::Multiplicative)]
    pub method: Method,
}

/// Command-line names for the numeric policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Method {
    /// Incremental ratio product
    Multiplicative,
    /// Log-space sum with one exponentiation
    LogSpace,
    /// Exact rational arithmetic
    Exact,
}

impl From<Method> for NumericPolicy {
    fn from(method: Method) -> Self {
        match method {
            Method::Multiplicative => Self::Multiplicative,
            Method::LogSpace => Self::LogSpace,
            Method::Exact => Self::Exact,
        }
    }
}

impl Cli {
    /// Install the stderr logger; `RUST_LOG` overrides the default level
    pub fn init_logging(&self) {
        let default_level = if self.verbose { "debug" } else { "warn" };
        let installed = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(default_level),
        )
        .format_timestamp(None)
        .try_init();

        // An earlier logger stays in charge and receives this message instead
        if let Err(err) = installed {
            log::debug!("keeping the existing logger: {err}");
        }
    }
}

/// Runs a parsed command, writing results to `out`
pub struct CommandRunner<W: Write> {
    cli: Cli,
    out: W,
}

impl<W: Write> CommandRunner<W> {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli, out: W) -> Self {
        Self { cli, out }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if the batch file cannot be read, parameters are
    /// rejected, or output cannot be written
    pub fn run(&mut self) -> Result<()> {
        match &self.cli.operation {
            Operation::Eval { counts, output } => {
                let [population, successes, sample, desired] = counts.coerced();
                let policy = NumericPolicy::from(output.method);
                let places = output.places;

                let params =
                    Parameters::new_or_degenerate(population, successes, sample, desired);
                let report = Report::evaluate(population, successes, sample, desired, policy)?;

                writeln!(
                    self.out,
                    "Population {}, successes {}, sample {}, desired {}",
                    params.population_size(),
                    params.population_successes(),
                    params.sample_size(),
                    params.desired_successes()
                )?;
                write_report(&mut self.out, &report, places)
            }
            Operation::Table {
                population,
                successes,
                sample,
                output,
            } => {
                let params = Parameters::new(
                    coerce_count(population),
                    coerce_count(successes),
                    coerce_count(sample),
                    0,
                )?;
                let table = DistributionTable::compute(&params, output.method.into())?;
                write_table(&mut self.out, &table, output.places)
            }
            Operation::Batch {
                file,
                output,
                quiet,
            } => {
                let entries = read_batch(file)?;
                let policy = NumericPolicy::from(output.method);

                let mut progress = ProgressManager::new();
                if !quiet && entries.len() >= PROGRESS_THRESHOLD {
                    progress.initialize(entries.len());
                }

                for entry in &entries {
                    let [population, successes, sample, desired] = entry.counts;
                    let report =
                        Report::evaluate(population, successes, sample, desired, policy)?;

                    let values = report
                        .values()
                        .map(|value| format_probability(value, output.places));
                    writeln!(
                        self.out,
                        "{population} {successes} {sample} {desired}\t{}",
                        values.join("\t")
                    )?;
                    progress.advance();
                }

                progress.finish();
                log::debug!("evaluated {} parameter sets", entries.len());
                Ok(())
            }
            Operation::Simulate {
                counts,
                trials,
                seed,
                places,
            } => {
                let [population, successes, sample, desired] = counts.coerced();
                let params = Parameters::new(population, successes, sample, desired)?;
                let report = simulate(&params, *trials, *seed)?;

                writeln!(self.out, "Simulated {trials} samples (seed {seed})")?;
                write_report(&mut self.out, &report, *places)
            }
        }
    }

    /// Consume the runner, returning the output sink
    pub fn into_output(self) -> W {
        self.out
    }
}

fn write_report(out: &mut impl Write, report: &Report, places: usize) -> Result<()> {
    for (label, value) in LABELS.iter().zip(report.values()) {
        writeln!(out, "{label}: {}", format_probability(value, places))?;
    }
    Ok(())
}

fn write_table(out: &mut impl Write, table: &DistributionTable, places: usize) -> Result<()> {
    writeln!(out, "k\tP(X = k)\tP(X <= k)\tP(X >= k)")?;
    for row in &table.rows {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            row.successes,
            format_probability(row.exact, places),
            format_probability(row.at_most, places),
            format_probability(row.at_least, places)
        )?;
    }

    let (low, high) = table.support;
    writeln!(out, "Mean: {}", format_probability(table.mean, places))?;
    writeln!(out, "Variance: {}", format_probability(table.variance, places))?;
    writeln!(out, "Support: {low}..={high}")?;
    Ok(())
}
