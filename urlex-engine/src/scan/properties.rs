//! Line-properties scanner (`.properties` and kin)
//!
//! Comment lines start with `#` or `!`. When a line carries a `key=value`
//! assignment the value side is scanned; otherwise the whole line goes
//! through the boundary pass (colon-separated keys are left to the boundary
//! grammar, since cutting at `:` would split scheme prefixes).

use crate::patterns::find_scheme_tokens;
use crate::scan::{line_token, walk_lines, ScanContext, Scanner};
use crate::token::Url;

pub struct PropertiesScanner;

impl Scanner for PropertiesScanner {
    fn name(&self) -> &'static str {
        "properties"
    }

    fn scan(&self, text: &str, ctx: &mut ScanContext) -> Vec<Url> {
        let mut urls = Vec::new();
        walk_lines(text, ctx, &mut urls, |line_no, line, ctx, urls| {
            let trimmed = line.trim_start();
            if trimmed.starts_with('#') || trimmed.starts_with('!') {
                return;
            }
            let base = match line.find('=') {
                Some(sep) => sep + 1,
                None => 0,
            };
            for found in find_scheme_tokens(&line[base..]) {
                let url = line_token(&found.text, found.scheme, line_no, base + found.start, line);
                ctx.accept(url, urls);
            }
        });
        urls
    }
}
