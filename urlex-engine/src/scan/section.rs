//! Section-configuration scanner (INI)
//!
//! No INI parser ships with the dependency stack, so the structural pass is a
//! small line grammar: `[section]` headers, `key = value` (or `key: value`)
//! assignments, `;`/`#` comments and blank lines. Anything else makes the
//! document structurally unparseable and the scanner degrades to line
//! scanning with a warning, like the table format.

use serde_json::{Map, Value};

use crate::error::{ParseError, RecoveryAction};
use crate::scan::structural::{walk_tree, StructuralParse};
use crate::scan::{comment_aware_pass, walk_lines, ScanContext, Scanner};
use crate::token::Url;

pub struct SectionScanner;

impl Scanner for SectionScanner {
    fn name(&self) -> &'static str {
        "section"
    }

    fn scan(&self, text: &str, ctx: &mut ScanContext) -> Vec<Url> {
        match parse_sections(text) {
            StructuralParse::Parsed(tree) => {
                let mut urls = Vec::new();
                walk_tree(&tree, &mut String::from("root"), ctx, &mut urls);
                urls
            }
            StructuralParse::Fallback(reason) => {
                ctx.push_error(ParseError::warning(
                    format!("section structure could not be parsed ({reason}); fell back to line scanning"),
                    RecoveryAction::Fallback,
                ));
                fallback_scan(text, ctx)
            }
        }
    }
}

/// Parse the section/key grammar into a value tree. Keys seen before any
/// section header land at the root; duplicate sections merge.
fn parse_sections(text: &str) -> StructuralParse {
    let mut root: Map<String, Value> = Map::new();
    let mut current: Option<String> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }
        if let Some(inner) = line.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
            let name = inner.trim();
            if name.is_empty() {
                return StructuralParse::Fallback(format!("empty section header at line {}", idx + 1));
            }
            root.entry(name.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            current = Some(name.to_string());
            continue;
        }
        if let Some(sep) = line.find(|c| c == '=' || c == ':') {
            let key = line[..sep].trim();
            let value = strip_inline_comment(line[sep + 1..].trim());
            if key.is_empty() {
                return StructuralParse::Fallback(format!("assignment without a key at line {}", idx + 1));
            }
            let target = match &current {
                Some(section) => match root.get_mut(section) {
                    Some(Value::Object(entries)) => entries,
                    _ => {
                        return StructuralParse::Fallback(format!(
                            "section {section} is not a table"
                        ))
                    }
                },
                None => &mut root,
            };
            target.insert(key.to_string(), Value::String(value.to_string()));
            continue;
        }
        return StructuralParse::Fallback(format!(
            "line {} is neither a section header nor a key assignment",
            idx + 1
        ));
    }

    StructuralParse::Parsed(Value::Object(root))
}

/// Cut an inline `;`/`#` comment preceded by whitespace off a value.
fn strip_inline_comment(value: &str) -> &str {
    let bytes = value.as_bytes();
    for i in 1..bytes.len() {
        if (bytes[i] == b';' || bytes[i] == b'#') && bytes[i - 1].is_ascii_whitespace() {
            return value[..i].trim_end();
        }
    }
    value
}

fn fallback_scan(text: &str, ctx: &mut ScanContext) -> Vec<Url> {
    let mut urls = Vec::new();
    walk_lines(text, ctx, &mut urls, |line_no, line, ctx, urls| {
        comment_aware_pass(line, &[';', '#'], line_no, ctx, urls);
    });
    urls
}
