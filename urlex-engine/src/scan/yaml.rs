//! Line-mapping scanner (YAML, both the `yaml` and `yml` spellings)
//!
//! Deliberately line-oriented: only the table and section formats get a full
//! structural parse. Whole-line `#` comments are skipped and trailing
//! comments are cut at the first `#` preceded by whitespace, so a `#`
//! fragment inside a URL survives (URLs contain no whitespace).

use crate::scan::{comment_aware_pass, walk_lines, ScanContext, Scanner};
use crate::token::Url;

pub struct YamlScanner;

impl Scanner for YamlScanner {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn scan(&self, text: &str, ctx: &mut ScanContext) -> Vec<Url> {
        let mut urls = Vec::new();
        walk_lines(text, ctx, &mut urls, |line_no, line, ctx, urls| {
            comment_aware_pass(line, &['#'], line_no, ctx, urls);
        });
        urls
    }
}
