//! Process command implementation

use anyhow::Result;
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use typograph_core::{CustomMapping, Output, TypographProcessor};

use crate::config::{parse_mapping, CliConfig};
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file with custom mappings
    #[arg(short, long, value_name = "FILE", env = "TYPOGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Extra mapping, tried after those from the configuration file
    #[arg(short = 'm', long = "mapping", value_name = "KEY=VALUE", value_parser = parse_mapping)]
    pub mappings: Vec<CustomMapping>,

    /// Process files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Substituted text
    Text,
    /// JSON array with replacements and source spans
    Json,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting typographic substitution");
        log::debug!("Arguments: {:?}", self);

        let mut config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        config.extend_mappings(&self.mappings);

        let processor = TypographProcessor::with_config(&config.typograph)?;
        let files = resolve_patterns(&self.input)?;
        log::info!("Processing {} file(s)", files.len());

        let results = if self.parallel {
            files
                .par_iter()
                .map(|path| process_file(&processor, path))
                .collect::<Result<Vec<_>>>()?
        } else {
            files
                .iter()
                .map(|path| process_file(&processor, path))
                .collect::<Result<Vec<_>>>()?
        };

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path)?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
        };

        for (path, output) in &results {
            formatter.format_document(path, output)?;
        }
        formatter.finish()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when running inside tests
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}

fn process_file(processor: &TypographProcessor, path: &Path) -> Result<(PathBuf, Output)> {
    let text = FileReader::read_text(path)?;
    let output = processor.process_text(&text);
    log::debug!(
        "{}: {} replacement(s)",
        path.display(),
        output.replacements.len()
    );
    Ok((path.to_path_buf(), output))
}
