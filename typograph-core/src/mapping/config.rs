//! Configuration structures and validation
//!
//! This module defines the TOML schema for custom mappings:
//!
//! ```toml
//! [[mappings]]
//! from = "brb"
//! to = "be right back"
//! ```
//!
//! An array of tables is used so registration order survives parsing.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TypographError};

/// Root typograph configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypographConfig {
    /// Custom literal replacements, tried after the built-in rules
    #[serde(default)]
    pub mappings: Vec<CustomMapping>,
}

/// One custom literal replacement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomMapping {
    /// Text to recognize, case-insensitively
    pub from: String,
    /// Replacement text
    pub to: String,
}

impl CustomMapping {
    /// Create a mapping from a key/value pair
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl TypographConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&source)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        match self.mappings.iter().position(|m| m.from.is_empty()) {
            Some(index) => Err(TypographError::EmptyKey { index }),
            None => Ok(()),
        }
    }

    /// Mappings as ordered key/value pairs
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.mappings
            .iter()
            .map(|m| (m.from.as_str(), m.to.as_str()))
    }
}
