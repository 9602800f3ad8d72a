//! Matchers: bounded scanners that recognize one typographic pattern
//!
//! Every matcher inspects text starting at its trigger character and only
//! ever reads as far as the pattern it is recognizing, so the cost of a
//! probe is proportional to the matched text, never to the remaining
//! document.

/// Successful match of a single matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult<'a> {
    /// Original text consumed, always a non-empty prefix of the probed text
    pub matched: &'a str,
    /// Text emitted in place of `matched`
    pub replacement: &'a str,
}

/// Parenthetical marks, checked case-insensitively
const MARKS: [(&str, &str); 4] = [("(c)", "©"), ("(r)", "®"), ("(p)", "§"), ("(tm)", "™")];

/// A single recognizable pattern
///
/// Matchers are plain data. Their priority is their position in the
/// [`MappingTable`](super::MappingTable) list for their trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// `(c)`, `(r)`, `(p)` and `(tm)`
    Parenthetical,
    /// A fixed character sequence such as `+-` or `?…`
    Exact {
        /// Sequence to recognize
        pattern: &'static str,
        /// Emitted text
        replacement: &'static str,
    },
    /// A run of at least `min` copies of `ch`, consumed in full
    Run {
        /// Repeated character
        ch: char,
        /// Minimum run length
        min: usize,
        /// Emitted text
        replacement: &'static str,
    },
    /// Two or three dashes; longer runs consume the first three
    Dashes,
    /// User-supplied literal, matched case-insensitively
    Literal {
        /// Text to recognize (non-empty)
        key: String,
        /// Emitted text
        value: String,
    },
}

impl Matcher {
    /// Character that must start any text this matcher accepts
    pub fn trigger(&self) -> char {
        match self {
            Matcher::Parenthetical => '(',
            Matcher::Exact { pattern, .. } => first_char(pattern),
            Matcher::Run { ch, .. } => *ch,
            Matcher::Dashes => '-',
            Matcher::Literal { key, .. } => first_char(key),
        }
    }

    /// Every character this matcher must be registered under
    ///
    /// Literal keys match case-insensitively, so they are reachable from
    /// each case form of their first character.
    pub fn triggers(&self) -> Vec<char> {
        let trigger = self.trigger();
        let mut triggers = vec![trigger];
        if let Matcher::Literal { .. } = self {
            for variant in [single(trigger.to_lowercase()), single(trigger.to_uppercase())]
                .into_iter()
                .flatten()
            {
                if !triggers.contains(&variant) {
                    triggers.push(variant);
                }
            }
        }
        triggers
    }

    /// Try to recognize this pattern at the start of `text`
    pub fn try_match<'a>(&'a self, text: &'a str) -> Option<MatchResult<'a>> {
        match self {
            Matcher::Parenthetical => MARKS.iter().find_map(|&(pattern, sign)| {
                starts_with_ignore_ascii_case(text, pattern).then(|| MatchResult {
                    matched: &text[..pattern.len()],
                    replacement: sign,
                })
            }),
            Matcher::Exact {
                pattern,
                replacement,
            } => text.starts_with(*pattern).then(|| MatchResult {
                matched: &text[..pattern.len()],
                replacement: *replacement,
            }),
            Matcher::Run {
                ch,
                min,
                replacement,
            } => {
                let count = text.chars().take_while(|c| c == ch).count();
                (count >= *min).then(|| MatchResult {
                    matched: &text[..count * ch.len_utf8()],
                    replacement: *replacement,
                })
            }
            Matcher::Dashes => {
                let count = text.bytes().take(3).take_while(|&b| b == b'-').count();
                let replacement = match count {
                    2 => "&ndash;",
                    3 => "&mdash;",
                    _ => return None,
                };
                Some(MatchResult {
                    matched: &text[..count],
                    replacement,
                })
            }
            Matcher::Literal { key, value } => {
                prefix_ignore_case(text, key).map(|matched| MatchResult {
                    matched,
                    replacement: value,
                })
            }
        }
    }
}

fn first_char(s: &str) -> char {
    s.chars().next().unwrap_or('\0')
}

/// The only character of a case mapping, if it maps to exactly one
fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    let ch = chars.next()?;
    chars.next().is_none().then_some(ch)
}

fn starts_with_ignore_ascii_case(text: &str, pattern: &str) -> bool {
    text.as_bytes()
        .get(..pattern.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(pattern.as_bytes()))
}

/// Returns the prefix of `text` equal to `key` ignoring case
///
/// The prefix is measured in `text`, which may differ in byte length from
/// `key` when the two differ in case outside ASCII.
fn prefix_ignore_case<'a>(text: &'a str, key: &str) -> Option<&'a str> {
    let mut chars = text.chars();
    let mut consumed = 0;
    for expected in key.chars() {
        let actual = chars.next()?;
        if actual != expected && !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
        consumed += actual.len_utf8();
    }
    Some(&text[..consumed])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(ch: char, min: usize, replacement: &'static str) -> Matcher {
        Matcher::Run {
            ch,
            min,
            replacement,
        }
    }

    #[test]
    fn test_parenthetical_marks() {
        let m = Matcher::Parenthetical;
        assert_eq!(m.try_match("(c) 2024").unwrap().replacement, "©");
        assert_eq!(m.try_match("(R)").unwrap().replacement, "®");
        assert_eq!(m.try_match("(p)").unwrap().replacement, "§");

        let tm = m.try_match("(Tm) rest").unwrap();
        assert_eq!(tm.matched, "(Tm)");
        assert_eq!(tm.replacement, "™");

        assert!(m.try_match("(x)").is_none());
        assert!(m.try_match("(c").is_none());
        assert!(m.try_match("(").is_none());
    }

    #[test]
    fn test_parenthetical_non_ascii_follower() {
        // Must not slice inside a multi-byte character
        assert!(Matcher::Parenthetical.try_match("(é)").is_none());
        assert!(Matcher::Parenthetical.try_match("(ç").is_none());
    }

    #[test]
    fn test_run_consumes_whole_run() {
        let dots = run('.', 2, "…");
        assert_eq!(dots.try_match("..").unwrap().matched, "..");
        assert_eq!(dots.try_match("..... what").unwrap().matched, ".....");
        assert!(dots.try_match(". ").is_none());

        let questions = run('?', 4, "???");
        assert!(questions.try_match("???").is_none());
        assert_eq!(questions.try_match("?????").unwrap().matched, "?????");
    }

    #[test]
    fn test_run_stops_at_first_other_char() {
        let commas = run(',', 2, ",");
        let result = commas.try_match(",,a,,").unwrap();
        assert_eq!(result.matched, ",,");
        assert_eq!(result.replacement, ",");
    }

    #[test]
    fn test_dashes() {
        let m = Matcher::Dashes;
        assert!(m.try_match("-").is_none());
        assert!(m.try_match("-a").is_none());

        let en = m.try_match("--b").unwrap();
        assert_eq!((en.matched, en.replacement), ("--", "&ndash;"));

        let em = m.try_match("---b").unwrap();
        assert_eq!((em.matched, em.replacement), ("---", "&mdash;"));

        let long = m.try_match("-----").unwrap();
        assert_eq!(long.matched, "---");
    }

    #[test]
    fn test_exact() {
        let m = Matcher::Exact {
            pattern: "?…",
            replacement: "?..",
        };
        let result = m.try_match("?… then").unwrap();
        assert_eq!(result.matched, "?…");
        assert_eq!(result.replacement, "?..");
        assert!(m.try_match("?.").is_none());
        assert_eq!(m.trigger(), '?');
    }

    #[test]
    fn test_literal_ignores_case() {
        let m = Matcher::Literal {
            key: "brb".to_string(),
            value: "be right back".to_string(),
        };
        for input in ["brb!", "BRB!", "Brb!"] {
            let result = m.try_match(input).unwrap();
            assert_eq!(result.matched, &input[..3]);
            assert_eq!(result.replacement, "be right back");
        }
        assert!(m.try_match("br").is_none());
        assert!(m.try_match("bra").is_none());
    }

    #[test]
    fn test_literal_non_ascii_case() {
        let m = Matcher::Literal {
            key: "ÉTÉ".to_string(),
            value: "summer".to_string(),
        };
        let result = m.try_match("été!").unwrap();
        assert_eq!(result.matched, "été");
    }

    #[test]
    fn test_triggers() {
        assert_eq!(Matcher::Parenthetical.trigger(), '(');
        assert_eq!(Matcher::Dashes.trigger(), '-');
        assert_eq!(run(',', 2, ",").trigger(), ',');
        let literal = Matcher::Literal {
            key: "->".to_string(),
            value: "→".to_string(),
        };
        assert_eq!(literal.trigger(), '-');
        assert_eq!(literal.triggers(), vec!['-']);
    }

    #[test]
    fn test_literal_triggers_cover_case_forms() {
        let literal = Matcher::Literal {
            key: "brb".to_string(),
            value: "be right back".to_string(),
        };
        assert_eq!(literal.triggers(), vec!['b', 'B']);

        // Built-ins are case-less
        assert_eq!(Matcher::Parenthetical.triggers(), vec!['(']);

        // 'ß' upper-cases to "SS", which is not a single trigger
        let sharp = Matcher::Literal {
            key: "ßx".to_string(),
            value: "y".to_string(),
        };
        assert_eq!(sharp.triggers(), vec!['ß']);
    }
}
