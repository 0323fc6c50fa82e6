//! Prose markup scanner (Markdown)
//!
//! The most permissive scanner, and the dispatcher's fallback for
//! unrecognized format tags. Four passes per line, in priority order: link
//! syntax `[label](target)`, angle-bracket autolinks `<target>`, inline HTML
//! attributes, then plain text. Link and autolink targets must pass the
//! classifier, so relative targets are rejected just like in markup.
//!
//! Suppressed regions: HTML comments, fenced code blocks (a line beginning
//! with three backticks toggles the fence), and inline code spans (odd count
//! of backticks before the match start).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::classify::classify;
use crate::scan::suppress::add_inline_code_spans;
use crate::scan::{
    attribute_pass, line_token, plain_text_pass, walk_lines, LineMask, ScanContext, Scanner,
    Suppressor,
};
use crate::token::Url;

/// `[label](target)`, with an optional title after the target.
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[^\]]*\]\(([^)\s]+)(?:\s+[^)]*)?\)").expect("link pattern is valid"));

/// `<target>` autolinks. The classifier filters out ordinary HTML tags.
static AUTOLINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<([^<>\s]+)>").expect("autolink pattern is valid"));

pub struct MarkdownScanner;

impl Scanner for MarkdownScanner {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn scan(&self, text: &str, ctx: &mut ScanContext) -> Vec<Url> {
        let mut urls = Vec::new();
        let mut suppressor = Suppressor::markdown();
        walk_lines(text, ctx, &mut urls, |line_no, line, ctx, urls| {
            let mut mask = suppressor.mask_line(line);
            add_inline_code_spans(line, &mut mask);
            link_pass(line, line_no, &mask, ctx, urls);
            autolink_pass(line, line_no, &mask, ctx, urls);
            attribute_pass(line, line_no, &mask, ctx, urls);
            plain_text_pass(line, line_no, &mask, ctx, urls);
        });
        urls
    }
}

fn link_pass(
    line: &str,
    line_no: usize,
    mask: &LineMask,
    ctx: &mut ScanContext,
    urls: &mut Vec<Url>,
) {
    for caps in LINK_RE.captures_iter(line) {
        let target = match caps.get(1) {
            Some(target) => target,
            None => continue,
        };
        if mask.suppressed(target.start()) {
            continue;
        }
        let scheme = classify(target.as_str());
        if !scheme.is_recognized() {
            continue;
        }
        let url = line_token(target.as_str(), scheme, line_no, target.start(), line);
        ctx.accept(url, urls);
    }
}

fn autolink_pass(
    line: &str,
    line_no: usize,
    mask: &LineMask,
    ctx: &mut ScanContext,
    urls: &mut Vec<Url>,
) {
    for caps in AUTOLINK_RE.captures_iter(line) {
        let target = match caps.get(1) {
            Some(target) => target,
            None => continue,
        };
        if mask.suppressed(target.start()) {
            continue;
        }
        let scheme = classify(target.as_str());
        if !scheme.is_recognized() {
            continue;
        }
        let url = line_token(target.as_str(), scheme, line_no, target.start(), line);
        ctx.accept(url, urls);
    }
}
