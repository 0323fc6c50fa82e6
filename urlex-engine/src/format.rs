//! Format tags accepted at the host boundary
//!
//! The host hands the dispatcher a free-form tag string; [`FormatTag::resolve`]
//! maps it onto the closed set below. Two script dialects share one scanner,
//! and `yml` is a second spelling of the `yaml` tag. Anything unrecognized
//! resolves to Markdown, whose plain-text and link passes are the most
//! permissive superset.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Resolved input format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatTag {
    Html,
    Css,
    Javascript,
    Typescript,
    Json,
    Yaml,
    Properties,
    Toml,
    Ini,
    Xml,
    Markdown,
    /// Only produced for calls cancelled before format resolution.
    Unknown,
}

impl FormatTag {
    /// Resolve a host-supplied tag string.
    ///
    /// `yml` folds into [`FormatTag::Yaml`]; unrecognized spellings resolve to
    /// [`FormatTag::Markdown`].
    pub fn resolve(tag: &str) -> FormatTag {
        match tag.trim().to_ascii_lowercase().as_str() {
            "html" => FormatTag::Html,
            "css" => FormatTag::Css,
            "javascript" => FormatTag::Javascript,
            "typescript" => FormatTag::Typescript,
            "json" => FormatTag::Json,
            "yaml" | "yml" => FormatTag::Yaml,
            "properties" => FormatTag::Properties,
            "toml" => FormatTag::Toml,
            "ini" => FormatTag::Ini,
            "xml" => FormatTag::Xml,
            _ => FormatTag::Markdown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormatTag::Html => "html",
            FormatTag::Css => "css",
            FormatTag::Javascript => "javascript",
            FormatTag::Typescript => "typescript",
            FormatTag::Json => "json",
            FormatTag::Yaml => "yaml",
            FormatTag::Properties => "properties",
            FormatTag::Toml => "toml",
            FormatTag::Ini => "ini",
            FormatTag::Xml => "xml",
            FormatTag::Markdown => "markdown",
            FormatTag::Unknown => "unknown",
        }
    }

    /// Every tag a host can name, in presentation order.
    pub fn all() -> &'static [FormatTag] {
        &[
            FormatTag::Html,
            FormatTag::Css,
            FormatTag::Javascript,
            FormatTag::Typescript,
            FormatTag::Json,
            FormatTag::Yaml,
            FormatTag::Properties,
            FormatTag::Toml,
            FormatTag::Ini,
            FormatTag::Xml,
            FormatTag::Markdown,
        ]
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
