//! Table-configuration scanner (TOML)
//!
//! Attempts a full structural parse first and walks the resulting value
//! tree; on a parse failure it records a warning and falls back to line
//! scanning with `#` comment handling.

use crate::error::{ParseError, RecoveryAction};
use crate::scan::structural::{walk_tree, StructuralParse};
use crate::scan::{comment_aware_pass, walk_lines, ScanContext, Scanner};
use crate::token::Url;

pub struct TableScanner;

impl Scanner for TableScanner {
    fn name(&self) -> &'static str {
        "table"
    }

    fn scan(&self, text: &str, ctx: &mut ScanContext) -> Vec<Url> {
        match parse_table(text) {
            StructuralParse::Parsed(tree) => {
                let mut urls = Vec::new();
                walk_tree(&tree, &mut String::from("root"), ctx, &mut urls);
                urls
            }
            StructuralParse::Fallback(reason) => {
                ctx.push_error(ParseError::warning(
                    format!("table structure could not be parsed ({reason}); fell back to line scanning"),
                    RecoveryAction::Fallback,
                ));
                fallback_scan(text, ctx)
            }
        }
    }
}

fn parse_table(text: &str) -> StructuralParse {
    let tree: toml::Value = match text.parse() {
        Ok(tree) => tree,
        Err(err) => return StructuralParse::Fallback(err.to_string()),
    };
    match serde_json::to_value(&tree) {
        Ok(value) => StructuralParse::Parsed(value),
        Err(err) => StructuralParse::Fallback(err.to_string()),
    }
}

fn fallback_scan(text: &str, ctx: &mut ScanContext) -> Vec<Url> {
    let mut urls = Vec::new();
    walk_lines(text, ctx, &mut urls, |line_no, line, ctx, urls| {
        comment_aware_pass(line, &['#'], line_no, ctx, urls);
    });
    urls
}
