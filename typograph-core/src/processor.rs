//! Main processor
//!
//! Convenience front end: owns an inline pipeline with the typograph
//! parser installed and turns whole documents into substituted text.

use serde::Serialize;

use crate::error::Result;
use crate::extension::{TypographExtension, TypographParser};
use crate::inline::{render, Inline, InlinePipeline, TypographInline};
use crate::mapping::{CustomMapping, TypographConfig};

/// Substitution result for one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Output {
    /// Rendered text with all replacements applied
    pub text: String,
    /// Replacement nodes in document order
    pub replacements: Vec<TypographInline>,
}

/// Typographic substitution processor
///
/// Immutable after construction; share one instance across threads to
/// process many documents.
#[derive(Debug)]
pub struct TypographProcessor {
    pipeline: InlinePipeline,
}

impl TypographProcessor {
    /// Create a processor with the built-in rules
    pub fn new() -> Self {
        let mut pipeline = InlinePipeline::new();
        pipeline.push(Box::new(TypographParser::default()));
        Self { pipeline }
    }

    /// Create a processor with extra literal mappings
    pub fn with_mappings<I, K, V>(mappings: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mappings = mappings
            .into_iter()
            .map(|(from, to)| CustomMapping::new(from, to))
            .collect();
        Self::with_extension(&TypographExtension::with_mappings(mappings))
    }

    /// Create a processor from configuration
    pub fn with_config(config: &TypographConfig) -> Result<Self> {
        config.validate()?;
        Self::with_extension(&TypographExtension::from_config(config))
    }

    fn with_extension(extension: &TypographExtension) -> Result<Self> {
        let mut pipeline = InlinePipeline::new();
        extension.setup(&mut pipeline)?;
        Ok(Self { pipeline })
    }

    /// Parse `text` into inline nodes
    pub fn parse(&self, text: &str) -> Vec<Inline> {
        self.pipeline.parse(text)
    }

    /// Substitute every recognized sequence in `text`
    pub fn process_text(&self, text: &str) -> Output {
        let nodes = self.parse(text);
        let rendered = render(&nodes);
        let replacements: Vec<_> = nodes
            .into_iter()
            .filter_map(|node| match node {
                Inline::Typograph(node) => Some(node),
                Inline::Literal { .. } => None,
            })
            .collect();
        tracing::debug!(
            bytes = text.len(),
            replacements = replacements.len(),
            "processed text"
        );
        Output {
            text: rendered,
            replacements,
        }
    }
}

impl Default for TypographProcessor {
    fn default() -> Self {
        Self::new()
    }
}
