//! Evaluation constants and runtime configuration defaults

// Presentation settings
/// Decimal places probabilities are rounded to before display
pub const DEFAULT_DECIMAL_PLACES: usize = 18;

// f64 carries 17 significant digits; anything past 20 places is noise
/// Largest accepted value for the decimal places option
pub const MAX_DECIMAL_PLACES: usize = 20;

/// Allowed distance of the total probability mass from one
pub const TOTAL_MASS_TOLERANCE: f64 = 1e-9;

// Monte-Carlo sampling defaults
/// Fixed seed for reproducible simulation
pub const DEFAULT_SEED: u64 = 42;

/// Default number of simulated samples
pub const DEFAULT_TRIALS: u64 = 100_000;

// Batch processing settings
/// Batches shorter than this run without a progress bar
pub const PROGRESS_THRESHOLD: usize = 64;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Characters accepted between fields of a batch line
pub const FIELD_SEPARATORS: &[char] = &[' ', '\t', ','];

/// Marker that starts a comment in batch input
pub const COMMENT_MARKER: char = '#';
