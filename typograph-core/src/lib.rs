//! Inline typographic substitution engine
//!
//! Recognizes short ASCII approximations of punctuation while scanning
//! text and replaces them with their typographic forms: `(c)` becomes
//! `©`, `...` becomes `…`, `---` becomes an em dash entity, and so on.
//! Custom literal replacements can be added on top of the built-in rules.
//!
//! # Architecture
//!
//! - [`mapping`]: the immutable trigger-keyed [`MappingTable`] and its
//!   [`Matcher`]s
//! - [`scanner`]: [`try_match`], which probes one cursor position, and the
//!   [`SourceCursor`] abstraction
//! - [`inline`] and [`extension`]: the inline pipeline the engine plugs
//!   into, and the hook that registers it
//! - [`processor`]: whole-document convenience API
//!
//! # Example
//!
//! ```rust
//! use typograph_core::TypographProcessor;
//!
//! let processor = TypographProcessor::new();
//! let output = processor.process_text("Copyright (C) 2024... really????");
//!
//! assert_eq!(output.text, "Copyright © 2024… really???");
//! assert_eq!(output.replacements.len(), 3);
//! assert_eq!(output.replacements[0].matched, "(C)");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod extension;
pub mod inline;
pub mod mapping;
pub mod processor;
pub mod scanner;

pub use error::{Result, TypographError};
pub use extension::{TypographExtension, TypographParser};
pub use inline::{render, Inline, InlineParser, InlinePipeline, TypographInline};
pub use mapping::{
    default_table, CustomMapping, MappingTable, MatchResult, Matcher, TypographConfig,
};
pub use processor::{Output, TypographProcessor};
pub use scanner::{try_match, Emission, SourceCursor, SourcePosition, SourceSpan, TextCursor};
