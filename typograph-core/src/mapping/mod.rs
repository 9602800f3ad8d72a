//! Mapping table: which matchers run for which trigger character
//!
//! The built-in rules cover parenthetical marks, plus/minus, ellipsis
//! runs, repeated commas, question and exclamation runs (with their `…`
//! compound forms) and dash runs. Custom literal mappings are appended
//! after the built-ins for their trigger.

pub mod config;
pub mod matcher;
pub mod table;

pub use config::{CustomMapping, TypographConfig};
pub use matcher::{MatchResult, Matcher};
pub use table::{default_table, MappingTable};
