//! Post-processing utilities
//!
//! Pure, stateless transformations over token lists, independent of the
//! dispatcher: de-duplication, grouping and sorting. The same dedupe/sort
//! contracts exist in a line-based variant for the host's cleanup commands,
//! which operate on plain one-token-per-line text instead of [`Url`] records.
//!
//! Every sort is a total order (ties always break on the raw value), so
//! results are deterministic and idempotent under re-sort.

use std::collections::{BTreeMap, HashSet};

use crate::classify::{extract_components, Scheme};
use crate::token::Url;

/// Bucket key for web/ftp tokens whose host cannot be parsed.
pub const INVALID_HOST_KEY: &str = "invalid";

fn normalized(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Keep the first occurrence of every value under case-insensitive,
/// whitespace-trimmed equality, preserving the survivors' relative order.
pub fn dedupe(urls: Vec<Url>) -> Vec<Url> {
    let mut seen = HashSet::new();
    let mut urls = urls;
    urls.retain(|url| seen.insert(normalized(&url.value)));
    urls
}

/// Group tokens by scheme. `BTreeMap` keeps the bucket order deterministic.
pub fn group_by_scheme(urls: &[Url]) -> BTreeMap<Scheme, Vec<Url>> {
    let mut groups: BTreeMap<Scheme, Vec<Url>> = BTreeMap::new();
    for url in urls {
        groups.entry(url.scheme).or_default().push(url.clone());
    }
    groups
}

/// Host used for grouping and the host sort: the token's own host, a parse
/// of its value as a fallback, or the invalid sentinel.
fn host_key(url: &Url) -> String {
    if !url.scheme.has_authority() {
        return url.scheme.as_str().to_string();
    }
    url.host
        .clone()
        .or_else(|| extract_components(&url.value).and_then(|c| c.host))
        .unwrap_or_else(|| INVALID_HOST_KEY.to_string())
}

/// Group web/ftp tokens by host; other schemes bucket under their scheme
/// name, unparseable web/ftp tokens under [`INVALID_HOST_KEY`].
pub fn group_by_host(urls: &[Url]) -> BTreeMap<String, Vec<Url>> {
    let mut groups: BTreeMap<String, Vec<Url>> = BTreeMap::new();
    for url in urls {
        groups.entry(host_key(url)).or_default().push(url.clone());
    }
    groups
}

/// Sort by raw value, lexicographic.
pub fn sort_by_value(mut urls: Vec<Url>) -> Vec<Url> {
    urls.sort_by(|a, b| a.value.cmp(&b.value));
    urls
}

/// Sort by scheme (classification priority order), then value.
pub fn sort_by_scheme(mut urls: Vec<Url>) -> Vec<Url> {
    urls.sort_by(|a, b| (a.scheme, &a.value).cmp(&(b.scheme, &b.value)));
    urls
}

/// Sort by host for web/ftp tokens (raw value for other schemes), then value.
pub fn sort_by_host(mut urls: Vec<Url>) -> Vec<Url> {
    urls.sort_by_cached_key(|url| {
        let key = if url.scheme.has_authority() {
            host_key(url)
        } else {
            url.value.clone()
        };
        (key, url.value.clone())
    });
    urls
}

/// Sort by value length, then value.
pub fn sort_by_length(mut urls: Vec<Url>) -> Vec<Url> {
    urls.sort_by_cached_key(|url| (url.value.chars().count(), url.value.clone()));
    urls
}

/// Line-based dedupe for the cleanup commands: keep the first line for every
/// case-insensitive trimmed value.
pub fn dedupe_lines(text: &str) -> String {
    let mut seen = HashSet::new();
    let survivors: Vec<&str> = text
        .lines()
        .filter(|line| seen.insert(normalized(line)))
        .collect();
    survivors.join("\n")
}

/// Line-based lexicographic sort for the cleanup commands. Blank lines are
/// dropped; comparison is on the trimmed line.
pub fn sort_lines(text: &str) -> String {
    let mut lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    lines.sort_by(|a, b| a.trim().cmp(b.trim()));
    lines.join("\n")
}

/// Line-based length sort (trimmed length, then value).
pub fn sort_lines_by_length(text: &str) -> String {
    let mut lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    lines.sort_by(|a, b| {
        let (a, b) = (a.trim(), b.trim());
        a.chars().count().cmp(&b.chars().count()).then_with(|| a.cmp(b))
    });
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(value: &str, scheme: Scheme) -> Url {
        Url::new(value, scheme)
    }

    #[test]
    fn dedupe_is_case_insensitive_and_keeps_the_first() {
        let urls = vec![
            url("https://A.com", Scheme::Https).with_context("first"),
            url("https://a.com", Scheme::Https).with_context("second"),
            url(" https://a.com ", Scheme::Https),
        ];
        let deduped = dedupe(urls);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].value, "https://A.com");
        assert_eq!(deduped[0].context.as_deref(), Some("first"));
    }

    #[test]
    fn dedupe_is_idempotent() {
        let urls = vec![
            url("https://a.com", Scheme::Https),
            url("https://b.com", Scheme::Https),
            url("HTTPS://A.COM", Scheme::Https),
        ];
        let once = dedupe(urls);
        let twice = dedupe(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn group_by_host_buckets_schemes_and_invalid_hosts() {
        let urls = vec![
            url("https://a.com/x", Scheme::Https).with_components(Some("a.com".into()), None),
            url("https://a.com/y", Scheme::Https).with_components(Some("a.com".into()), None),
            url("mailto:x@b.com", Scheme::Mailto),
            url("http://", Scheme::Http),
        ];
        let groups = group_by_host(&urls);
        assert_eq!(groups["a.com"].len(), 2);
        assert_eq!(groups["mailto"].len(), 1);
        assert_eq!(groups[INVALID_HOST_KEY].len(), 1);
    }

    #[test]
    fn sort_by_value_is_idempotent() {
        let urls = vec![
            url("https://c.com", Scheme::Https),
            url("https://a.com", Scheme::Https),
            url("https://b.com", Scheme::Https),
        ];
        let once = sort_by_value(urls);
        let twice = sort_by_value(once.clone());
        assert_eq!(once, twice);
        assert_eq!(once[0].value, "https://a.com");
    }

    #[test]
    fn sort_by_length_breaks_ties_on_value() {
        let urls = vec![
            url("https://bb.com", Scheme::Https),
            url("https://aa.com", Scheme::Https),
            url("https://a.com", Scheme::Https),
        ];
        let sorted = sort_by_length(urls);
        assert_eq!(sorted[0].value, "https://a.com");
        assert_eq!(sorted[1].value, "https://aa.com");
        assert_eq!(sorted[2].value, "https://bb.com");
    }

    #[test]
    fn sort_by_scheme_orders_by_classification_priority() {
        let urls = vec![
            url("mailto:x@a.com", Scheme::Mailto),
            url("https://a.com", Scheme::Https),
            url("ftp://a.com", Scheme::Ftp),
        ];
        let sorted = sort_by_scheme(urls);
        assert_eq!(sorted[0].scheme, Scheme::Https);
        assert_eq!(sorted[1].scheme, Scheme::Ftp);
        assert_eq!(sorted[2].scheme, Scheme::Mailto);
    }

    #[test]
    fn line_dedupe_keeps_first_spelling() {
        let text = "https://A.com\nhttps://b.com\nhttps://a.com";
        assert_eq!(dedupe_lines(text), "https://A.com\nhttps://b.com");
    }

    #[test]
    fn line_sorts_drop_blanks_and_are_stable_under_repeat() {
        let text = "https://c.com\n\nhttps://a.com\nhttps://b.com";
        let once = sort_lines(text);
        assert_eq!(once, "https://a.com\nhttps://b.com\nhttps://c.com");
        assert_eq!(sort_lines(&once), once);
    }
}
