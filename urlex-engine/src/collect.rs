//! Link collection over free text
//!
//! A looser companion to the extraction engine, used by the host's
//! collection command: besides scheme-prefixed URLs it also picks up bare
//! `www.` domains, absolute and relative paths, and `#anchors`, tagging each
//! token with a [`UrlKind`]. Looser means noisier, which is why none of this
//! feeds the format scanners.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::classify::Scheme;
use crate::patterns::find_scheme_tokens;
use crate::scan::ScanContext;
use crate::token::{Url, UrlKind};

/// `www.`-prefixed domains without a scheme.
static DOMAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\bwww\.[a-z0-9-]+(?:\.[a-z0-9-]+)+[^\s<>"'{}|\\^`\[\];)]*"#)
        .expect("domain pattern is valid")
});

/// Absolute paths at a token boundary.
static ABSOLUTE_PATH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|\s)(/[A-Za-z0-9._~%+@!$&*=:,;-]+(?:/[A-Za-z0-9._~%+@!$&*=:,;-]*)*)")
        .expect("absolute path pattern is valid")
});

/// `./` and `../` relative paths.
static RELATIVE_PATH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:^|\s)(\.\.?/[^\s<>"'{}|\\^`\[\];)]+)"#)
        .expect("relative path pattern is valid")
});

/// In-page `#anchor` references.
static ANCHOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s)(#[A-Za-z0-9_-]+)").expect("anchor pattern is valid"));

/// Collect every link-like token from `text`, full URLs first on each line,
/// de-duplicated by exact value across the whole text.
pub fn collect_links(text: &str) -> Vec<Url> {
    let mut ctx = ScanContext::new();
    let mut urls = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;

        for found in find_scheme_tokens(line) {
            let url = Url::new(&found.text, found.scheme)
                .with_kind(UrlKind::Full)
                .with_position(line_no, found.start + 1)
                .with_context(line.trim());
            ctx.accept(url, &mut urls);
        }

        for caps in DOMAIN_RE.captures_iter(line) {
            let token = match caps.get(0) {
                Some(token) => token,
                None => continue,
            };
            // a www. host inside a scheme-prefixed URL was already collected
            if line[..token.start()].ends_with("//") {
                continue;
            }
            let url = Url::new(token.as_str(), Scheme::Unrecognized)
                .with_kind(UrlKind::Domain)
                .with_position(line_no, token.start() + 1)
                .with_context(line.trim());
            ctx.accept(url, &mut urls);
        }

        kind_pass(
            &ABSOLUTE_PATH_RE,
            UrlKind::AbsolutePath,
            line,
            line_no,
            &mut ctx,
            &mut urls,
        );
        kind_pass(
            &RELATIVE_PATH_RE,
            UrlKind::RelativePath,
            line,
            line_no,
            &mut ctx,
            &mut urls,
        );
        kind_pass(&ANCHOR_RE, UrlKind::Anchor, line, line_no, &mut ctx, &mut urls);
    }

    urls
}

fn kind_pass(
    rule: &Regex,
    kind: UrlKind,
    line: &str,
    line_no: usize,
    ctx: &mut ScanContext,
    urls: &mut Vec<Url>,
) {
    for caps in rule.captures_iter(line) {
        let token = match caps.get(1) {
            Some(token) => token,
            None => continue,
        };
        let url = Url::new(token.as_str(), Scheme::Unrecognized)
            .with_kind(kind)
            .with_position(line_no, token.start() + 1)
            .with_context(line.trim());
        ctx.accept(url, urls);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<(String, Option<UrlKind>)> {
        collect_links(text)
            .into_iter()
            .map(|url| (url.value, url.kind))
            .collect()
    }

    #[test]
    fn full_urls_keep_their_classification() {
        let urls = collect_links("see https://example.com/docs");
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].kind, Some(UrlKind::Full));
        assert_eq!(urls[0].scheme, Scheme::Https);
    }

    #[test]
    fn bare_domains_are_tagged() {
        assert_eq!(
            kinds("visit www.example.com today"),
            vec![("www.example.com".to_string(), Some(UrlKind::Domain))]
        );
    }

    #[test]
    fn paths_and_anchors_are_tagged() {
        let found = kinds("config at /etc/app/config.toml docs at ./docs/index see #install");
        assert!(found.contains(&("/etc/app/config.toml".to_string(), Some(UrlKind::AbsolutePath))));
        assert!(found.contains(&("./docs/index".to_string(), Some(UrlKind::RelativePath))));
        assert!(found.contains(&("#install".to_string(), Some(UrlKind::Anchor))));
    }

    #[test]
    fn scheme_prefixed_urls_are_not_double_counted_as_domains() {
        let found = kinds("https://www.example.com/x");
        assert_eq!(
            found,
            vec![("https://www.example.com/x".to_string(), Some(UrlKind::Full))]
        );
    }
}
