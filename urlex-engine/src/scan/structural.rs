//! Value-tree walking for the structurally parsed formats
//!
//! The table and section scanners first parse the whole document into a
//! nested value tree and walk it recursively, collecting string leaves the
//! classifier accepts. The walk builds a dotted/bracketed context path as it
//! descends (`root.server.url`, `root.links[0]`); tree-sourced tokens carry
//! that path as context and no line position, since the parsed tree has no
//! line map.
//!
//! The parse outcome is a tagged value, not a caught exception: either a
//! tree, or a fallback signal carrying the reason, on which the scanner
//! degrades to line scanning and records a warning.

use serde_json::Value;

use crate::classify::{classify, extract_components};
use crate::scan::ScanContext;
use crate::token::Url;

/// Outcome of attempting a full structural parse.
#[derive(Debug)]
pub enum StructuralParse {
    /// The document parsed into a value tree ready for the recursive walk.
    Parsed(Value),
    /// The structure was not parseable; line scanning takes over.
    Fallback(String),
}

/// Recursively collect string leaves that pass the classifier. Arrays are
/// visited by index, objects by key; `path` accumulates the context.
pub(crate) fn walk_tree(
    value: &Value,
    path: &mut String,
    ctx: &mut ScanContext,
    urls: &mut Vec<Url>,
) {
    match value {
        Value::String(leaf) => {
            let scheme = classify(leaf);
            if !scheme.is_recognized() {
                return;
            }
            let mut url = Url::new(leaf.clone(), scheme).with_context(path.clone());
            if scheme.has_authority() {
                if let Some(components) = extract_components(leaf) {
                    url = url.with_components(components.host, components.path);
                }
            }
            ctx.accept(url, urls);
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                let len = path.len();
                path.push('[');
                path.push_str(&index.to_string());
                path.push(']');
                walk_tree(item, path, ctx, urls);
                path.truncate(len);
            }
        }
        Value::Object(entries) => {
            for (key, item) in entries {
                let len = path.len();
                path.push('.');
                path.push_str(key);
                walk_tree(item, path, ctx, urls);
                path.truncate(len);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn walk(value: Value) -> Vec<Url> {
        let mut ctx = ScanContext::new();
        let mut urls = Vec::new();
        walk_tree(&value, &mut String::from("root"), &mut ctx, &mut urls);
        urls
    }

    #[test]
    fn collects_string_leaves_with_dotted_paths() {
        let urls = walk(json!({
            "config": { "api": "https://api.example.com" },
            "name": "not a url",
        }));
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].value, "https://api.example.com");
        assert_eq!(urls[0].context.as_deref(), Some("root.config.api"));
        assert_eq!(urls[0].position, None);
    }

    #[test]
    fn arrays_are_indexed_with_brackets() {
        let urls = walk(json!({ "links": ["https://a.example.com", "https://b.example.com"] }));
        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0].context.as_deref(), Some("root.links[0]"));
        assert_eq!(urls[1].context.as_deref(), Some("root.links[1]"));
    }

    #[test]
    fn non_string_leaves_are_ignored() {
        assert!(walk(json!({ "port": 8080, "debug": true, "extra": null })).is_empty());
    }
}
