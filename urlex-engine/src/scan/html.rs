//! Markup scanner (HTML)
//!
//! Two passes per line, attribute first: `href`/`src`/`action` values
//! (classifier-validated, full value captured even with spaces), then the
//! plain-text boundary pass. `<!-- -->` comments are suppressed across lines.
//! A URL appearing both in an attribute and as prose on the same line is
//! reported once, attribute-sourced, through the per-scan dedupe.

use crate::scan::{attribute_pass, plain_text_pass, walk_lines, ScanContext, Scanner, Suppressor};
use crate::token::Url;

pub struct HtmlScanner;

impl Scanner for HtmlScanner {
    fn name(&self) -> &'static str {
        "html"
    }

    fn scan(&self, text: &str, ctx: &mut ScanContext) -> Vec<Url> {
        let mut urls = Vec::new();
        let mut suppressor = Suppressor::html_comments();
        walk_lines(text, ctx, &mut urls, |line_no, line, ctx, urls| {
            let mask = suppressor.mask_line(line);
            attribute_pass(line, line_no, &mask, ctx, urls);
            plain_text_pass(line, line_no, &mask, ctx, urls);
        });
        urls
    }
}
