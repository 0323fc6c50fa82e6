//! Stylesheet scanner (CSS)
//!
//! Passes per line: `url(...)` function arguments (quoted or bare), `@import`
//! string form, then plain text. `/* */` comments are suppressed across
//! lines. Extracted values must pass the classifier, so the ubiquitous
//! relative asset references in stylesheets are rejected.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::classify::classify;
use crate::scan::{line_token, plain_text_pass, walk_lines, LineMask, ScanContext, Scanner, Suppressor};
use crate::token::Url;

/// `url("...")`, `url('...')` or `url(bare)`.
static URL_FN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\burl\(\s*(?:"([^"]*)"|'([^']*)'|([^)"'\s]+))\s*\)"#)
        .expect("url() pattern is valid")
});

/// `@import "..."` / `@import '...'` (the `@import url(...)` form is handled
/// by the `url()` pass).
static IMPORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)@import\s+(?:"([^"]+)"|'([^']+)')"#).expect("@import pattern is valid")
});

pub struct CssScanner;

impl Scanner for CssScanner {
    fn name(&self) -> &'static str {
        "css"
    }

    fn scan(&self, text: &str, ctx: &mut ScanContext) -> Vec<Url> {
        let mut urls = Vec::new();
        let mut suppressor = Suppressor::block_comments();
        walk_lines(text, ctx, &mut urls, |line_no, line, ctx, urls| {
            let mask = suppressor.mask_line(line);
            url_function_pass(line, line_no, &mask, ctx, urls);
            import_pass(line, line_no, &mask, ctx, urls);
            plain_text_pass(line, line_no, &mask, ctx, urls);
        });
        urls
    }
}

fn url_function_pass(
    line: &str,
    line_no: usize,
    mask: &LineMask,
    ctx: &mut ScanContext,
    urls: &mut Vec<Url>,
) {
    for caps in URL_FN_RE.captures_iter(line) {
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

fn import_pass(
    line: &str,
    line_no: usize,
    mask: &LineMask,
    ctx: &mut ScanContext,
    urls: &mut Vec<Url>,
) {
    for caps in IMPORT_RE.captures_iter(line) {
        let value = match caps.get(1).or_else(|| caps.get(2)) {
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
