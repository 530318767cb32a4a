//! Command-line surface, presentation and error handling

/// Batch file reading
pub mod batch;
/// Command-line parsing and command execution
pub mod cli;
/// Evaluation constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// Fixed-precision probability formatting
pub mod format;
/// Lenient coercion of raw count input
pub mod input;
/// Batch progress display
pub mod progress;
