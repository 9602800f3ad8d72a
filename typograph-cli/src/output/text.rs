//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use std::path::Path;
use typograph_core::Output;

/// Plain text formatter - writes the substituted text of each document
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, _path: &Path, output: &Output) -> Result<()> {
        self.writer.write_all(output.text.as_bytes())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
