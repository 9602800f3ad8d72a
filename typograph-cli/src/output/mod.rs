//! Output formatting module

use anyhow::Result;
use std::path::Path;
use typograph_core::Output;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one processed document
    fn format_document(&mut self, path: &Path, output: &Output) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
