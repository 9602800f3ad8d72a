//! typograph command-line entry point

use clap::Parser;
use typograph_cli::commands::Commands;

/// Typographic substitution for text documents
#[derive(Debug, Parser)]
#[command(name = "typograph", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    Cli::parse().command.execute()
}
