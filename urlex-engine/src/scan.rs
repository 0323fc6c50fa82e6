//! Format scanners
//!
//! One scanner per supported dialect, all sharing the same contract:
//!
//! 1. Walk the document line by line with a 1-based line index (two formats
//!    first attempt a full structural parse and fall back to line walking).
//! 2. Fold format-specific suppression state across lines (comments, fenced
//!    code); tokens whose match start falls inside a suppressed region are
//!    discarded.
//! 3. Apply extraction passes in priority order within each line, and
//!    de-duplicate by exact token value through the per-scan [`ScanContext`]
//!    so one document never emits the same literal twice.
//! 4. Delimited-value passes (attributes, link syntax, quoted literals) are
//!    validated by the classifier before acceptance; plain-text boundary
//!    matches are accepted as-is because the boundary grammar already
//!    enforces a known scheme prefix.
//! 5. A failure inside a single line becomes a recoverable skip error and the
//!    walk continues; one malformed line never aborts the rest of the
//!    document.
//!
//! Relative and schemeless targets are never extracted from markup or
//! Markdown link targets: without a base URL they are not resolvable, so only
//! scheme-prefixed tokens count. That trade-off is deliberate and preserved.

use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::classify::{classify, extract_components, Scheme};
use crate::error::{ParseError, RecoveryAction};
use crate::patterns::find_scheme_tokens;
use crate::token::Url;

pub mod css;
pub mod html;
pub mod json;
pub mod markdown;
pub mod properties;
pub mod script;
pub mod section;
pub mod structural;
pub mod suppress;
pub mod table;
pub mod xml;
pub mod yaml;

pub use css::CssScanner;
pub use html::HtmlScanner;
pub use json::JsonScanner;
pub use markdown::MarkdownScanner;
pub use properties::PropertiesScanner;
pub use script::ScriptScanner;
pub use section::SectionScanner;
pub use suppress::{LineMask, Suppressor};
pub use table::TableScanner;
pub use xml::XmlScanner;
pub use yaml::YamlScanner;

/// A format-specific URL scanner.
pub trait Scanner: Send + Sync {
    /// Short name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Extract every URL token from `text` in detection order, collecting
    /// recoverable errors in `ctx`. Never fails: degraded outcomes are
    /// reported through the context.
    fn scan(&self, text: &str, ctx: &mut ScanContext) -> Vec<Url>;
}

/// Per-call scanner state: the value seen-set and the errors collected along
/// the way. Passed explicitly into each scan so calls share nothing.
#[derive(Debug, Default)]
pub struct ScanContext {
    seen: HashSet<String>,
    errors: Vec<ParseError>,
}

impl ScanContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `url` unless its exact value was already emitted in this scan.
    /// Returns whether the token was accepted.
    pub fn accept(&mut self, url: Url, out: &mut Vec<Url>) -> bool {
        if self.seen.insert(url.value.clone()) {
            out.push(url);
            true
        } else {
            false
        }
    }

    pub fn push_error(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn take_errors(&mut self) -> Vec<ParseError> {
        std::mem::take(&mut self.errors)
    }
}

/// Walk `text` line by line with a 1-based index, converting a failure inside
/// a single line into a recoverable skip error and continuing with the next.
pub(crate) fn walk_lines<F>(
    text: &str,
    ctx: &mut ScanContext,
    urls: &mut Vec<Url>,
    mut scan_line: F,
) where
    F: FnMut(usize, &str, &mut ScanContext, &mut Vec<Url>),
{
    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let attempt =
            panic::catch_unwind(AssertUnwindSafe(|| scan_line(line_no, line, ctx, urls)));
        if attempt.is_err() {
            ctx.push_error(ParseError::warning(
                format!("line {line_no} could not be scanned and was skipped"),
                RecoveryAction::Skip,
            ));
        }
    }
}

/// Build a line-sourced token: position from the zero-based match offset plus
/// one, context from the trimmed line, host/path populated for authority
/// schemes.
pub(crate) fn line_token(
    value: &str,
    scheme: Scheme,
    line_no: usize,
    offset: usize,
    line: &str,
) -> Url {
    let mut url = Url::new(value, scheme)
        .with_position(line_no, offset + 1)
        .with_context(line.trim());
    if scheme.has_authority() {
        if let Some(components) = extract_components(value) {
            url = url.with_components(components.host, components.path);
        }
    }
    url
}

/// Plain-text pass shared by every line-oriented scanner: boundary-grammar
/// matches outside suppressed regions, accepted without further validation.
pub(crate) fn plain_text_pass(
    line: &str,
    line_no: usize,
    mask: &LineMask,
    ctx: &mut ScanContext,
    urls: &mut Vec<Url>,
) {
    for found in find_scheme_tokens(line) {
        if mask.suppressed(found.start) {
            continue;
        }
        let url = line_token(&found.text, found.scheme, line_no, found.start, line);
        ctx.accept(url, urls);
    }
}

/// `href`/`src`/`action` attribute values, quoted or bare.
static ATTRIBUTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\b(?:href|src|action)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>"']+))"#)
        .expect("attribute pattern is valid")
});

/// Attribute pass shared by the markup-aware scanners. The full delimited
/// value is captured (spaces included) and must pass the classifier, which
/// rejects `javascript:`, `data:` and schemeless relative targets.
pub(crate) fn attribute_pass(
    line: &str,
    line_no: usize,
    mask: &LineMask,
    ctx: &mut ScanContext,
    urls: &mut Vec<Url>,
) {
    for caps in ATTRIBUTE_RE.captures_iter(line) {
        let value = match caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)) {
            Some(value) => value,
            None => continue,
        };
        if mask.suppressed(value.start()) {
            continue;
        }
        let scheme = classify(value.as_str());
        if !scheme.is_recognized() {
            continue;
        }
        let url = line_token(value.as_str(), scheme, line_no, value.start(), line);
        ctx.accept(url, urls);
    }
}

/// Boundary pass for the comment-bearing line formats: strip the comment,
/// match on the remainder, but keep the full line as the token's context.
pub(crate) fn comment_aware_pass(
    line: &str,
    markers: &[char],
    line_no: usize,
    ctx: &mut ScanContext,
    urls: &mut Vec<Url>,
) {
    let scannable = match comment_free_prefix(line, markers) {
        Some(prefix) => prefix,
        None => return,
    };
    for found in find_scheme_tokens(scannable) {
        let url = line_token(&found.text, found.scheme, line_no, found.start, line);
        ctx.accept(url, urls);
    }
}

/// Split `line` at its comment, if any: `None` for a whole-line comment,
/// otherwise the prefix before the first marker that is preceded by
/// whitespace. Markers inside tokens survive (a URL fragment `#` is never
/// preceded by a space).
pub(crate) fn comment_free_prefix<'a>(line: &'a str, markers: &[char]) -> Option<&'a str> {
    let trimmed = line.trim_start();
    if trimmed.chars().next().is_some_and(|c| markers.contains(&c)) {
        return None;
    }
    let bytes = line.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if markers.contains(&(b as char)) && i > 0 && bytes[i - 1].is_ascii_whitespace() {
            return Some(&line[..i]);
        }
    }
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_dedupes_by_exact_value() {
        let mut ctx = ScanContext::new();
        let mut urls = Vec::new();
        assert!(ctx.accept(Url::new("https://a.com", Scheme::Https), &mut urls));
        assert!(!ctx.accept(Url::new("https://a.com", Scheme::Https), &mut urls));
        // a different casing is a different exact value at scan level
        assert!(ctx.accept(Url::new("https://A.com", Scheme::Https), &mut urls));
        assert_eq!(urls.len(), 2);
    }

    #[test]
    fn walk_lines_converts_a_line_failure_into_a_skip_error() {
        let mut ctx = ScanContext::new();
        let mut urls = Vec::new();
        walk_lines("one\ntwo\nthree", &mut ctx, &mut urls, |line_no, line, _, _| {
            if line == "two" {
                panic!("boom");
            }
            assert!(line_no == 1 || line_no == 3);
        });
        assert_eq!(ctx.errors().len(), 1);
        assert_eq!(ctx.errors()[0].recovery, RecoveryAction::Skip);
        assert!(ctx.errors()[0].message.contains("line 2"));
    }

    #[test]
    fn attribute_pass_rejects_unrecognized_schemes() {
        let mut ctx = ScanContext::new();
        let mut urls = Vec::new();
        let line = r#"<a href="javascript:alert(1)">x</a> <a href="relative/p.html">y</a>"#;
        attribute_pass(line, 1, &LineMask::clear(), &mut ctx, &mut urls);
        assert!(urls.is_empty());
    }

    #[test]
    fn attribute_pass_captures_values_with_spaces() {
        let mut ctx = ScanContext::new();
        let mut urls = Vec::new();
        let line = r#"<a href="https://a.com/my page.html">x</a>"#;
        attribute_pass(line, 1, &LineMask::clear(), &mut ctx, &mut urls);
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].value, "https://a.com/my page.html");
    }

    #[test]
    fn comment_free_prefix_handles_whole_line_and_trailing_comments() {
        assert_eq!(comment_free_prefix("# all comment", &['#']), None);
        assert_eq!(
            comment_free_prefix("url: https://a.com/x#frag # note", &['#']),
            Some("url: https://a.com/x#frag ")
        );
        assert_eq!(comment_free_prefix("plain line", &['#']), Some("plain line"));
    }
}
