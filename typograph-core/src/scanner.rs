//! Scanning matcher and source cursor
//!
//! [`try_match`] probes one position: it looks up the matchers for the
//! character under the cursor, tries them in table order and stops at the
//! first success. The host advances its cursor by the length of the
//! original matched text, not by the length of the replacement.

use serde::{Deserialize, Serialize};

use crate::mapping::{MatchResult, MappingTable};

/// Location of the cursor in the source document
///
/// `offset` is a byte offset; `line` and `column` are 0-based, with
/// `column` counted in characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePosition {
    /// Byte offset from the start of the document
    pub offset: usize,
    /// Line number
    pub line: usize,
    /// Column in characters
    pub column: usize,
}

/// Source range covered by a node
///
/// `end` is inclusive: the offset of the last byte of the node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpan {
    /// Byte offset of the first byte
    pub start: usize,
    /// Byte offset of the last byte
    pub end: usize,
    /// Line of `start`
    pub line: usize,
    /// Column of `start`
    pub column: usize,
}

impl SourceSpan {
    /// Span of `len` bytes starting at `position`
    ///
    /// `len` must be non-zero.
    pub fn at(position: SourcePosition, len: usize) -> Self {
        Self {
            start: position.offset,
            end: position.offset + len - 1,
            line: position.line,
            column: position.column,
        }
    }

    /// Number of bytes covered
    pub fn byte_len(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Result of a successful probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emission<'a> {
    /// Text to emit
    pub replacement: &'a str,
    /// Original text consumed
    pub matched: &'a str,
    /// Where `matched` sits in the source
    pub span: SourceSpan,
}

impl Emission<'_> {
    /// Bytes the host cursor must advance
    #[inline]
    pub fn consumed(&self) -> usize {
        self.matched.len()
    }
}

/// Probe the table at the start of `remaining`
///
/// `remaining` is the full rest of the document from the cursor onward.
/// Returns `None` when the first character is not a trigger or when no
/// matcher for it succeeds; the caller then treats the character as
/// ordinary text.
///
/// # Panics
///
/// Panics if a matcher reports success without consuming any text, since
/// the host cursor would never advance.
pub fn try_match<'a>(
    table: &'a MappingTable,
    remaining: &'a str,
    position: SourcePosition,
) -> Option<Emission<'a>> {
    let trigger = remaining.chars().next()?;
    let MatchResult {
        matched,
        replacement,
    } = table
        .matchers(trigger)
        .iter()
        .find_map(|matcher| matcher.try_match(remaining))?;

    assert!(
        !matched.is_empty(),
        "matcher for {trigger:?} reported an empty match"
    );
    debug_assert!(remaining.starts_with(matched));

    let span = SourceSpan::at(position, matched.len());
    tracing::trace!(
        matched,
        replacement,
        start = span.start,
        end = span.end,
        "typograph match"
    );

    Some(Emission {
        replacement,
        matched,
        span,
    })
}

/// Text cursor supplied by the host
pub trait SourceCursor {
    /// Text from the cursor to the end of the document, without copying
    fn remaining(&self) -> &str;

    /// Current position
    fn position(&self) -> SourcePosition;

    /// Move forward by `bytes`, which must land on a character boundary
    fn advance(&mut self, bytes: usize);
}

/// Cursor over an in-memory document
///
/// Tracks line and column incrementally, so a full pass over the
/// document costs time linear in its length.
#[derive(Debug, Clone)]
pub struct TextCursor<'a> {
    text: &'a str,
    position: SourcePosition,
}

impl<'a> TextCursor<'a> {
    /// Create a cursor at the start of `text`
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            position: SourcePosition::default(),
        }
    }

    /// Whether the whole document has been consumed
    pub fn is_at_end(&self) -> bool {
        self.position.offset >= self.text.len()
    }

    /// Character under the cursor
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }
}

impl SourceCursor for TextCursor<'_> {
    fn remaining(&self) -> &str {
        &self.text[self.position.offset..]
    }

    fn position(&self) -> SourcePosition {
        self.position
    }

    fn advance(&mut self, bytes: usize) {
        let start = self.position.offset;
        let end = (start + bytes).min(self.text.len());
        for ch in self.text[start..end].chars() {
            if ch == '\n' {
                self.position.line += 1;
                self.position.column = 0;
            } else {
                self.position.column += 1;
            }
        }
        self.position.offset = end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe<'a>(table: &'a MappingTable, text: &'a str) -> Option<Emission<'a>> {
        try_match(table, text, SourcePosition::default())
    }

    #[test]
    fn test_no_match_for_non_trigger() {
        let table = MappingTable::new();
        assert!(probe(&table, "abc").is_none());
        assert!(probe(&table, "").is_none());
    }

    #[test]
    fn test_trigger_without_match() {
        let table = MappingTable::new();
        assert!(probe(&table, ". end").is_none());
        assert!(probe(&table, "???").is_none());
        assert!(probe(&table, "-x").is_none());
    }

    #[test]
    fn test_emission_span() {
        let table = MappingTable::new();
        let position = SourcePosition {
            offset: 10,
            line: 2,
            column: 4,
        };
        let emission = try_match(&table, "(C) 2024", position).unwrap();
        assert_eq!(emission.replacement, "©");
        assert_eq!(emission.matched, "(C)");
        assert_eq!(emission.consumed(), 3);
        assert_eq!(
            emission.span,
            SourceSpan {
                start: 10,
                end: 12,
                line: 2,
                column: 4,
            }
        );
        assert_eq!(emission.span.byte_len(), 3);
    }

    #[test]
    fn test_compound_wins_over_run() {
        let table = MappingTable::new();
        let emission = probe(&table, "?…").unwrap();
        assert_eq!(emission.replacement, "?..");
        assert_eq!(emission.matched, "?…");

        let emission = probe(&table, "!!!!!").unwrap();
        assert_eq!(emission.replacement, "!!!");
        assert_eq!(emission.consumed(), 5);
    }

    #[test]
    fn test_builtin_tried_before_custom() {
        let table = MappingTable::with_custom([("--x", "cross")]).unwrap();
        let emission = probe(&table, "--x").unwrap();
        assert_eq!(emission.replacement, "&ndash;");
        assert_eq!(emission.consumed(), 2);

        // `-x` reaches the custom matcher only after the dash rule declines
        let table = MappingTable::with_custom([("-x", "ex")]).unwrap();
        let emission = probe(&table, "-x").unwrap();
        assert_eq!(emission.replacement, "ex");
    }

    #[test]
    fn test_cursor_tracks_lines_and_columns() {
        let mut cursor = TextCursor::new("ab\ncé--");
        cursor.advance(2);
        assert_eq!(
            cursor.position(),
            SourcePosition {
                offset: 2,
                line: 0,
                column: 2,
            }
        );
        cursor.advance(1);
        assert_eq!(cursor.position().line, 1);
        assert_eq!(cursor.position().column, 0);

        // 'c' + 'é' (two bytes)
        cursor.advance(3);
        assert_eq!(cursor.position().column, 2);
        assert_eq!(cursor.remaining(), "--");
        assert_eq!(cursor.peek(), Some('-'));

        cursor.advance(100);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.remaining(), "");
    }
}
