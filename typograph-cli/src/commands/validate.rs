//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use typograph_core::MappingTable;

use crate::config::CliConfig;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the mapping configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let loaded = CliConfig::load(&self.config).and_then(|config| {
            let table = MappingTable::from_config(&config.typograph)?;
            Ok((config, table))
        });

        match loaded {
            Ok((config, table)) => {
                let triggers: String = table.triggers().iter().collect();
                println!("✓ Configuration is valid!");
                println!("  Custom mappings: {}", config.typograph.mappings.len());
                println!("  Trigger characters: {triggers}");
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
