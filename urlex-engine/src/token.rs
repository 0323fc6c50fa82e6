//! Token records produced by the extraction engine
//!
//! This module defines the data structures shared by every scanner and by the
//! post-processing utilities:
//!
//! - [`Position`] - A 1-based line:column position in the scanned document
//! - [`Url`] - A single extracted URL occurrence with classification and origin
//! - [`UrlKind`] - Coarse tag used by the link-collection utility
//!
//! ## Key Design
//!
//! - **Immutable occurrences**: a `Url` is created once per detection and never
//!   mutated afterwards; it is owned by the result list that contains it.
//! - **Optional origin**: line-oriented scanners attach a `Position` and the
//!   trimmed source line as `context`; tree-walking scanners attach the dotted
//!   value path as `context` and no position, since the parsed tree carries no
//!   line map.
//! - **`value` is never empty** and `scheme` is always set, even when the
//!   classifier answers `Unrecognized`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::classify::Scheme;

/// A position in the scanned document (line and column, both 1-based).
///
/// Built at detection time from the scanner's line index and the zero-based
/// match offset plus one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Coarse link classification used by the link-collection utility.
///
/// The extraction engine itself only emits `Full` (everything it accepts is
/// scheme-prefixed); the other variants come from [`crate::collect`], which
/// also picks up bare domains, paths and anchors from free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UrlKind {
    Full,
    Domain,
    AbsolutePath,
    RelativePath,
    Anchor,
}

impl UrlKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrlKind::Full => "full",
            UrlKind::Domain => "domain",
            UrlKind::AbsolutePath => "absolute-path",
            UrlKind::RelativePath => "relative-path",
            UrlKind::Anchor => "anchor",
        }
    }
}

impl fmt::Display for UrlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single extracted URL occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Url {
    /// The raw token text as it appeared in the document. Never empty.
    pub value: String,
    /// Protocol class decided by the classifier. Always set.
    pub scheme: Scheme,
    /// Coarse tag attached by the link-collection utility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<UrlKind>,
    /// Host component, populated for schemes with an authority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Path component, populated for schemes with an authority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Where the token was found, when the scanner walks lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// Trimmed source line, or the dotted value path for tree-walked formats.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl Url {
    /// Create a bare occurrence. Scanners layer origin information on top
    /// with the `with_*` builders.
    pub fn new(value: impl Into<String>, scheme: Scheme) -> Self {
        let value = value.into();
        debug_assert!(!value.is_empty(), "token value must not be empty");
        Self {
            value,
            scheme,
            kind: None,
            host: None,
            path: None,
            position: None,
            context: None,
        }
    }

    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.position = Some(Position::new(line, column));
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_components(mut self, host: Option<String>, path: Option<String>) -> Self {
        self.host = host;
        self.path = path;
        self
    }

    pub fn with_kind(mut self, kind: UrlKind) -> Self {
        self.kind = Some(kind);
        self
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.position {
            Some(position) => write!(f, "{} [{}] at {}", self.value, self.scheme, position),
            None => write!(f, "{} [{}]", self.value, self.scheme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_displays_line_colon_column() {
        assert_eq!(Position::new(3, 14).to_string(), "3:14");
    }

    #[test]
    fn builders_layer_origin_information() {
        let url = Url::new("https://example.com/a", Scheme::Https)
            .with_position(2, 5)
            .with_context("see https://example.com/a")
            .with_components(Some("example.com".into()), Some("/a".into()));

        assert_eq!(url.position, Some(Position::new(2, 5)));
        assert_eq!(url.host.as_deref(), Some("example.com"));
        assert_eq!(url.path.as_deref(), Some("/a"));
        assert_eq!(url.kind, None);
    }

    #[test]
    fn display_includes_position_when_present() {
        let url = Url::new("mailto:a@b.c", Scheme::Mailto).with_position(1, 1);
        assert_eq!(url.to_string(), "mailto:a@b.c [mailto] at 1:1");
    }
}
