//! Trigger-keyed matcher table
//!
//! Built once, then shared read-only. There is no way to mutate a table
//! after construction, so one instance can serve any number of
//! concurrent scans.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use super::config::TypographConfig;
use super::matcher::Matcher;
use crate::error::{Result, TypographError};

/// Process-wide default table
static DEFAULT_TABLE: OnceLock<Arc<MappingTable>> = OnceLock::new();

/// Shared table holding only the built-in rules
pub fn default_table() -> Arc<MappingTable> {
    DEFAULT_TABLE.get_or_init(|| Arc::new(MappingTable::new())).clone()
}

/// Built-in rules in priority order
fn builtin_matchers() -> Vec<Matcher> {
    vec![
        Matcher::Parenthetical,
        Matcher::Exact {
            pattern: "+-",
            replacement: "±",
        },
        Matcher::Run {
            ch: '.',
            min: 2,
            replacement: "…",
        },
        Matcher::Run {
            ch: ',',
            min: 2,
            replacement: ",",
        },
        // Compound forms go before the bare runs sharing their trigger
        Matcher::Exact {
            pattern: "?…",
            replacement: "?..",
        },
        Matcher::Run {
            ch: '?',
            min: 4,
            replacement: "???",
        },
        Matcher::Exact {
            pattern: "!…",
            replacement: "!..",
        },
        Matcher::Run {
            ch: '!',
            min: 4,
            replacement: "!!!",
        },
        Matcher::Dashes,
    ]
}

/// Ordered mapping from trigger character to matchers
#[derive(Debug, Clone)]
pub struct MappingTable {
    rules: HashMap<char, Vec<Matcher>>,
    /// Trigger characters in registration order
    triggers: Vec<char>,
}

impl Default for MappingTable {
    fn default() -> Self {
        Self::new()
    }
}

impl MappingTable {
    /// Create a table with the built-in rules only
    pub fn new() -> Self {
        let mut table = Self {
            rules: HashMap::new(),
            triggers: Vec::new(),
        };
        for matcher in builtin_matchers() {
            table.register(matcher);
        }
        table
    }

    /// Create a table with custom literal mappings appended to the built-ins
    ///
    /// Each mapping is registered under the first character of its key
    /// (in both cases), after every matcher already present for that
    /// character.
    pub fn with_custom<I, K, V>(mappings: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::new();
        let mut custom = 0;
        for (index, (key, value)) in mappings.into_iter().enumerate() {
            let key = key.into();
            if key.is_empty() {
                return Err(TypographError::EmptyKey { index });
            }
            let value = value.into();
            tracing::trace!(%key, %value, "registering custom mapping");
            table.register(Matcher::Literal { key, value });
            custom += 1;
        }
        tracing::debug!(
            triggers = table.triggers.len(),
            custom,
            "built typograph mapping table"
        );
        Ok(table)
    }

    /// Create a table from configuration
    pub fn from_config(config: &TypographConfig) -> Result<Self> {
        config.validate()?;
        Self::with_custom(config.pairs())
    }

    fn register(&mut self, matcher: Matcher) {
        for trigger in matcher.triggers() {
            self.rules
                .entry(trigger)
                .or_insert_with(|| {
                    self.triggers.push(trigger);
                    Vec::new()
                })
                .push(matcher.clone());
        }
    }

    /// Trigger characters in registration order
    pub fn triggers(&self) -> &[char] {
        &self.triggers
    }

    /// Check whether `ch` starts any rule
    #[inline]
    pub fn is_trigger(&self, ch: char) -> bool {
        self.rules.contains_key(&ch)
    }

    /// Matchers for `ch` in the order they are tried
    #[inline]
    pub fn matchers(&self, ch: char) -> &[Matcher] {
        self.rules.get(&ch).map_or(&[], Vec::as_slice)
    }
}
