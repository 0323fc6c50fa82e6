//! Script scanner (JavaScript and TypeScript share it)
//!
//! Quoted string literals (single, double, backtick) whose whole content
//! classifies as a URL are captured verbatim, spaces included; everything
//! else is left to the plain-text boundary pass. `/* */` comments are
//! suppressed across lines; `//` comments are suppressed to end of line when
//! the marker sits at the start of the line or after whitespace, which keeps
//! the `//` inside `https://` (and inside URL paths) alive.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::classify::classify;
use crate::scan::{line_token, plain_text_pass, walk_lines, LineMask, ScanContext, Scanner, Suppressor};
use crate::token::Url;

static STRING_LITERAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""([^"]*)"|'([^']*)'|`([^`]*)`"#).expect("string literal pattern is valid")
});

pub struct ScriptScanner;

impl Scanner for ScriptScanner {
    fn name(&self) -> &'static str {
        "script"
    }

    fn scan(&self, text: &str, ctx: &mut ScanContext) -> Vec<Url> {
        let mut urls = Vec::new();
        let mut suppressor = Suppressor::block_comments();
        walk_lines(text, ctx, &mut urls, |line_no, line, ctx, urls| {
            let mut mask = suppressor.mask_line(line);
            if let Some(start) = line_comment_start(line, &mask) {
                mask.add(start..line.len());
            }
            literal_pass(line, line_no, &mask, ctx, urls);
            plain_text_pass(line, line_no, &mask, ctx, urls);
        });
        urls
    }
}

/// Find a `//` line comment: at line start or after whitespace, outside any
/// already-suppressed region.
fn line_comment_start(line: &str, mask: &LineMask) -> Option<usize> {
    let bytes = line.as_bytes();
    for i in 0..bytes.len().saturating_sub(1) {
        if bytes[i] == b'/'
            && bytes[i + 1] == b'/'
            && (i == 0 || bytes[i - 1].is_ascii_whitespace())
            && !mask.suppressed(i)
        {
            return Some(i);
        }
    }
    None
}

fn literal_pass(
    line: &str,
    line_no: usize,
    mask: &LineMask,
    ctx: &mut ScanContext,
    urls: &mut Vec<Url>,
) {
    for caps in STRING_LITERAL_RE.captures_iter(line) {
        let content = match caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)) {
            Some(content) => content,
            None => continue,
        };
        if mask.suppressed(content.start()) {
            continue;
        }
        let trimmed = content.as_str().trim();
        let scheme = classify(trimmed);
        if !scheme.is_recognized() {
            continue;
        }
        let lead = content.as_str().len() - content.as_str().trim_start().len();
        let url = line_token(trimmed, scheme, line_no, content.start() + lead, line);
        ctx.accept(url, urls);
    }
}
