//! Shared token-boundary vocabulary
//!
//! One boundary rule per scheme, shared by every format scanner: a token
//! begins with the scheme's literal prefix (case-insensitive, on a word
//! boundary) and continues while characters are neither whitespace nor one of
//! the terminator set `< > " ' { } | \ ^ ` [ ] ; )`. Those terminators are the
//! characters most likely to delimit a URL inside markup attributes, quoted
//! strings and prose, while still letting query strings, fragments and unusual
//! path characters through.
//!
//! Known lossy boundary: a URL followed immediately by a space in free text is
//! truncated at the space even when the author meant it to continue. That is
//! an accepted trade-off (the test suite asserts it as expected behavior), and
//! it is deliberately asymmetric with the attribute and quoted-literal passes,
//! which capture the full delimited value before classification.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::classify::{Scheme, SCHEME_PREFIXES};

/// Character class shared by every boundary rule: not whitespace, not a
/// terminator.
const BOUNDARY_CLASS: &str = r#"[^\s<>"'{}|\\^`\[\];)]"#;

/// Boundary rules in classification priority order, compiled once.
static BOUNDARY_RULES: Lazy<Vec<(Scheme, Regex)>> = Lazy::new(|| {
    SCHEME_PREFIXES
        .iter()
        .map(|(scheme, prefix)| {
            let pattern = format!(r"(?i)\b{}{}+", regex::escape(prefix), BOUNDARY_CLASS);
            let rule = Regex::new(&pattern).expect("boundary rule patterns are valid");
            (*scheme, rule)
        })
        .collect()
});

/// A raw boundary match within a single line.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternMatch {
    pub scheme: Scheme,
    /// Zero-based byte offset of the match within the line.
    pub start: usize,
    pub text: String,
}

/// Find every scheme-prefixed token in `line`, reported in column order.
///
/// The boundary grammar itself enforces a known scheme prefix, so matches need
/// no further validation before acceptance.
pub fn find_scheme_tokens(line: &str) -> Vec<PatternMatch> {
    let mut matches = Vec::new();
    for (scheme, rule) in BOUNDARY_RULES.iter() {
        for found in rule.find_iter(line) {
            matches.push(PatternMatch {
                scheme: *scheme,
                start: found.start(),
                text: found.as_str().to_string(),
            });
        }
    }
    matches.sort_by_key(|m| m.start);
    matches
}
