//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the file to add your own mappings");
        println!("2. Validate your configuration:");
        println!("   typograph validate --config {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   typograph process -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template() -> String {
        r#"# typograph configuration
#
# Built-in rules always run first. Custom mappings are tried after them,
# in the order listed, whenever the text reaches the first character of
# their key. Keys match case-insensitively; keys must not be empty.

# [[mappings]]
# from = "brb"
# to = "be right back"

# [[mappings]]
# from = "->"
# to = "→"

[output]
# Pretty print JSON output
pretty_json = true
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("typograph.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("typograph.toml"));
    }

    #[test]
    fn test_generate_template_parses() {
        let config: CliConfig = toml::from_str(&GenerateConfigArgs::generate_template()).unwrap();
        assert!(config.typograph.mappings.is_empty());
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_generate_config_execute() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("typograph.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };
        assert!(args.execute().is_ok());
        assert!(output_path.exists());

        let config = CliConfig::load(&output_path).unwrap();
        assert!(config.typograph.mappings.is_empty());
    }

    #[test]
    fn test_generate_config_unwritable_path() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("/nonexistent/dir/typograph.toml"),
        };
        assert!(args.execute().is_err());
    }
}
