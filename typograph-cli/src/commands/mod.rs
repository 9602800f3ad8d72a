//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

pub mod generate_config;
pub mod process;
pub mod validate;

use crate::config::CliConfig;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Apply typographic substitutions to text files
    Process(process::ProcessArgs),

    /// Validate a mapping configuration file
    Validate(validate::ValidateArgs),

    /// Write a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List trigger characters and how many matchers each one has
    Triggers {
        /// Include custom mappings from this configuration file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Triggers { config } => {
                let config = match config {
                    Some(path) => CliConfig::load(path)?,
                    None => CliConfig::default(),
                };
                print!("{}", list_triggers(&config)?);
                Ok(())
            }
        }
    }
}

/// Render one line per trigger character
fn list_triggers(config: &CliConfig) -> Result<String> {
    let table = typograph_core::MappingTable::from_config(&config.typograph)?;
    let mut listing = String::new();
    for &trigger in table.triggers() {
        let count = table.matchers(trigger).len();
        let noun = if count == 1 { "matcher" } else { "matchers" };
        listing.push_str(&format!("{trigger:?}  {count} {noun}\n"));
    }
    Ok(listing)
}
