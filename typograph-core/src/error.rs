//! Error types
//!
//! Only table construction can fail. Scanning has no error path: a probe
//! either yields an emission or declines.

use thiserror::Error;

/// Configuration-time errors
#[derive(Error, Debug)]
pub enum TypographError {
    /// A custom mapping was supplied with an empty key
    #[error("custom mapping #{index} has an empty key")]
    EmptyKey {
        /// Position of the offending mapping in registration order
        index: usize,
    },

    /// The configuration document could not be parsed
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for table construction and configuration loading
pub type Result<T> = std::result::Result<T, TypographError>;
