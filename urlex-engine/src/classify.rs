//! Scheme classification for candidate tokens
//!
//! Classification is a pure function of a string's prefix: it has no state,
//! no side effects, and it never fails. A candidate that matches none of the
//! known prefixes is `Unrecognized`, which is a valid classification rather
//! than an error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of protocol classes a token can be assigned.
///
/// Declaration order doubles as classification priority order and as the
/// default ordering used by the scheme-based sorts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Scheme {
    Https,
    Http,
    Ftp,
    File,
    Mailto,
    Tel,
    Unrecognized,
}

/// Literal prefixes that introduce each recognized scheme, tried in order.
pub(crate) const SCHEME_PREFIXES: &[(Scheme, &str)] = &[
    (Scheme::Https, "https://"),
    (Scheme::Http, "http://"),
    (Scheme::Ftp, "ftp://"),
    (Scheme::File, "file://"),
    (Scheme::Mailto, "mailto:"),
    (Scheme::Tel, "tel:"),
];

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Https => "https",
            Scheme::Http => "http",
            Scheme::Ftp => "ftp",
            Scheme::File => "file",
            Scheme::Mailto => "mailto",
            Scheme::Tel => "tel",
            Scheme::Unrecognized => "unrecognized",
        }
    }

    /// Whether URLs of this scheme carry an authority (host) component.
    pub fn has_authority(&self) -> bool {
        matches!(self, Scheme::Https | Scheme::Http | Scheme::Ftp)
    }

    /// Whether the classifier recognized the candidate at all.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Scheme::Unrecognized)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a candidate string by its scheme prefix, case-insensitive.
///
/// Anything without one of the known prefixes classifies as
/// [`Scheme::Unrecognized`]; classification failure is not extraction failure.
pub fn classify(candidate: &str) -> Scheme {
    for (scheme, prefix) in SCHEME_PREFIXES {
        let head = candidate.get(..prefix.len());
        if head.is_some_and(|head| head.eq_ignore_ascii_case(prefix)) {
            return *scheme;
        }
    }
    Scheme::Unrecognized
}

/// Host and path pulled out of a candidate by [`extract_components`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlComponents {
    pub scheme: Scheme,
    pub host: Option<String>,
    pub path: Option<String>,
}

/// Parse host and path for candidates whose scheme has an authority component.
///
/// Candidates with a recognized scheme but no authority (mail, phone, file)
/// come back with the scheme alone. Returns `None` only when the candidate
/// cannot be parsed as a URL at all under the `url` crate's grammar.
pub fn extract_components(candidate: &str) -> Option<UrlComponents> {
    let scheme = classify(candidate);
    let parsed = url::Url::parse(candidate).ok()?;
    if scheme.has_authority() {
        Some(UrlComponents {
            scheme,
            host: parsed.host_str().map(str::to_string),
            path: Some(parsed.path().to_string()),
        })
    } else {
        Some(UrlComponents {
            scheme,
            host: None,
            path: None,
        })
    }
}
