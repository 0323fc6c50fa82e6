//! Structured-object scanner (JSON)
//!
//! JSON is walked line by line with the plain-text boundary pass alone: the
//! format has no comments to suppress, string values quote their content, and
//! the `"` terminator in the boundary grammar keeps tokens inside string
//! literals clean.

use crate::scan::{plain_text_pass, walk_lines, LineMask, ScanContext, Scanner};
use crate::token::Url;

pub struct JsonScanner;

impl Scanner for JsonScanner {
    fn name(&self) -> &'static str {
        "json"
    }

    fn scan(&self, text: &str, ctx: &mut ScanContext) -> Vec<Url> {
        let mut urls = Vec::new();
        walk_lines(text, ctx, &mut urls, |line_no, line, ctx, urls| {
            plain_text_pass(line, line_no, &LineMask::clear(), ctx, urls);
        });
        urls
    }
}
