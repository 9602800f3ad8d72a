//! Error handling for the CLI application

use thiserror::Error;

/// Custom error type for CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// No input file matched the given patterns
    #[error("No files found matching the provided patterns")]
    NoInputFiles,
    /// A `KEY=VALUE` mapping argument was malformed
    #[error("Invalid mapping '{0}': expected KEY=VALUE with a non-empty KEY")]
    InvalidMapping(String),
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
