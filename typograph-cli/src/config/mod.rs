//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use typograph_core::{CustomMapping, TypographConfig};

use crate::error::CliError;

/// CLI configuration structure
///
/// The `[[mappings]]` tables are the core typograph configuration; the CLI
/// adds an `[output]` table on top.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Custom mappings
    #[serde(flatten)]
    pub typograph: TypographConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty_json: true }
    }
}

impl CliConfig {
    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Self = toml::from_str(&source)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        config
            .typograph
            .validate()
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        Ok(config)
    }

    /// Append mappings given on the command line after the file's own
    pub fn extend_mappings(&mut self, extra: &[CustomMapping]) {
        self.typograph.mappings.extend_from_slice(extra);
    }
}

/// Parse a `KEY=VALUE` command-line mapping
///
/// Splits at the first `=`, so keys containing `=` must come from a
/// configuration file.
pub fn parse_mapping(arg: &str) -> Result<CustomMapping, CliError> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok(CustomMapping::new(key, value)),
        _ => Err(CliError::InvalidMapping(arg.to_string())),
    }
}
