//! Registration of the typograph engine in an inline pipeline

use std::sync::Arc;

use crate::error::Result;
use crate::inline::{Inline, InlineParser, InlinePipeline, TypographInline};
use crate::mapping::{default_table, CustomMapping, MappingTable, TypographConfig};
use crate::scanner::{try_match, SourceCursor};

/// Inline parser that recognizes typographic sequences
#[derive(Debug, Clone)]
pub struct TypographParser {
    table: Arc<MappingTable>,
}

impl TypographParser {
    /// Name under which the parser registers
    pub const NAME: &'static str = "typograph";

    /// Create a parser over a shared table
    pub fn new(table: Arc<MappingTable>) -> Self {
        Self { table }
    }

    /// Table this parser consults
    pub fn table(&self) -> &MappingTable {
        &self.table
    }

    /// Probe the cursor position and consume the match, if any
    ///
    /// The cursor only moves on success, and then by the length of the
    /// original text.
    pub fn try_match(&self, cursor: &mut dyn SourceCursor) -> Option<TypographInline> {
        let node = {
            let emission = try_match(&self.table, cursor.remaining(), cursor.position())?;
            TypographInline::from(emission)
        };
        cursor.advance(node.matched.len());
        Some(node)
    }
}

impl Default for TypographParser {
    fn default() -> Self {
        Self::new(default_table())
    }
}

impl InlineParser for TypographParser {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn opening_chars(&self) -> &[char] {
        self.table.triggers()
    }

    fn opens_at(&self, ch: char) -> bool {
        self.table.is_trigger(ch)
    }

    fn parse(&self, cursor: &mut dyn SourceCursor) -> Option<Inline> {
        self.try_match(cursor).map(Inline::Typograph)
    }
}

/// Pipeline extension installing a [`TypographParser`]
#[derive(Debug, Clone, Default)]
pub struct TypographExtension {
    mappings: Vec<CustomMapping>,
}

impl TypographExtension {
    /// Extension using the built-in rules only
    pub fn new() -> Self {
        Self::default()
    }

    /// Extension with extra literal mappings
    pub fn with_mappings(mappings: Vec<CustomMapping>) -> Self {
        Self { mappings }
    }

    /// Extension configured from a [`TypographConfig`]
    pub fn from_config(config: &TypographConfig) -> Self {
        Self::with_mappings(config.mappings.clone())
    }

    /// Build the parser this extension would install
    pub fn parser(&self) -> Result<TypographParser> {
        if self.mappings.is_empty() {
            return Ok(TypographParser::default());
        }
        let table = MappingTable::with_custom(
            self.mappings
                .iter()
                .map(|m| (m.from.as_str(), m.to.as_str())),
        )?;
        Ok(TypographParser::new(Arc::new(table)))
    }

    /// Insert the parser ahead of every other parser
    ///
    /// Does nothing when a typograph parser is already registered.
    pub fn setup(&self, pipeline: &mut InlinePipeline) -> Result<()> {
        if pipeline.contains(TypographParser::NAME) {
            tracing::debug!("typograph parser already registered");
            return Ok(());
        }
        pipeline.insert(0, Box::new(self.parser()?));
        Ok(())
    }
}
