//! Inline nodes and the host recognition chain
//!
//! A minimal inline pipeline: an ordered list of parsers, each declaring
//! the characters it can start at. Text no parser recognizes becomes
//! literal nodes.

use serde::{Deserialize, Serialize};

use crate::scanner::{Emission, SourceCursor, SourcePosition, SourceSpan, TextCursor};

/// Replacement node produced by a typograph match
///
/// Renders as `content`; `matched` keeps the original text for
/// diagnostics and source mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypographInline {
    /// Rendered text
    pub content: String,
    /// Original source text
    pub matched: String,
    /// Location of `matched` in the source
    pub span: SourceSpan,
}

impl From<Emission<'_>> for TypographInline {
    fn from(emission: Emission<'_>) -> Self {
        Self {
            content: emission.replacement.to_string(),
            matched: emission.matched.to_string(),
            span: emission.span,
        }
    }
}

/// Inline node variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inline {
    /// Text copied from the source unchanged
    Literal {
        /// The text
        text: String,
        /// Location in the source
        span: SourceSpan,
    },
    /// Typographic replacement
    Typograph(TypographInline),
}

impl Inline {
    /// Rendered content of this node
    pub fn content(&self) -> &str {
        match self {
            Inline::Literal { text, .. } => text,
            Inline::Typograph(node) => &node.content,
        }
    }

    /// Source span of this node
    pub fn span(&self) -> SourceSpan {
        match self {
            Inline::Literal { span, .. } => *span,
            Inline::Typograph(node) => node.span,
        }
    }

    /// Returns the replacement node when this is one
    pub fn as_typograph(&self) -> Option<&TypographInline> {
        match self {
            Inline::Typograph(node) => Some(node),
            Inline::Literal { .. } => None,
        }
    }
}

/// A recognizer in the inline chain
pub trait InlineParser: Send + Sync {
    /// Identifier used to detect duplicate registration
    fn name(&self) -> &'static str;

    /// Characters at which this parser is worth trying
    fn opening_chars(&self) -> &[char];

    /// Whether this parser is worth trying at `ch`
    ///
    /// Called once per character of the document. Override with a
    /// constant-time lookup when the opening set can be large.
    fn opens_at(&self, ch: char) -> bool {
        self.opening_chars().contains(&ch)
    }

    /// Try to recognize a node at the cursor
    ///
    /// On success the cursor has been advanced past the consumed text. On
    /// failure it must be left untouched.
    fn parse(&self, cursor: &mut dyn SourceCursor) -> Option<Inline>;
}

/// Ordered chain of inline parsers
#[derive(Default)]
pub struct InlinePipeline {
    parsers: Vec<Box<dyn InlineParser>>,
}

impl std::fmt::Debug for InlinePipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.parsers.iter().map(|p| p.name()))
            .finish()
    }
}

impl InlinePipeline {
    /// Create an empty pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parser at the lowest priority
    pub fn push(&mut self, parser: Box<dyn InlineParser>) {
        self.parsers.push(parser);
    }

    /// Insert a parser at `index`; `0` puts it ahead of all others
    pub fn insert(&mut self, index: usize, parser: Box<dyn InlineParser>) {
        let index = index.min(self.parsers.len());
        self.parsers.insert(index, parser);
    }

    /// Check whether a parser with this name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.parsers.iter().any(|p| p.name() == name)
    }

    /// Registered parser names in priority order
    pub fn names(&self) -> Vec<&'static str> {
        self.parsers.iter().map(|p| p.name()).collect()
    }

    /// Parse `text` into inline nodes
    ///
    /// Adjacent unrecognized characters are coalesced into one literal.
    pub fn parse(&self, text: &str) -> Vec<Inline> {
        let mut cursor = TextCursor::new(text);
        let mut nodes = Vec::new();
        let mut literal_start = None;

        'scan: while let Some(ch) = cursor.peek() {
            for parser in &self.parsers {
                if !parser.opens_at(ch) {
                    continue;
                }
                let before = cursor.position();
                if let Some(node) = parser.parse(&mut cursor) {
                    if let Some(start) = literal_start.take() {
                        nodes.push(literal(text, start, before.offset));
                    }
                    nodes.push(node);
                    continue 'scan;
                }
            }

            if literal_start.is_none() {
                literal_start = Some(cursor.position());
            }
            cursor.advance(ch.len_utf8());
        }

        if let Some(start) = literal_start {
            nodes.push(literal(text, start, text.len()));
        }
        nodes
    }
}

fn literal(text: &str, start: SourcePosition, end: usize) -> Inline {
    Inline::Literal {
        text: text[start.offset..end].to_string(),
        span: SourceSpan::at(start, end - start.offset),
    }
}

/// Concatenate the rendered content of `nodes`
pub fn render(nodes: &[Inline]) -> String {
    nodes.iter().map(Inline::content).collect()
}
