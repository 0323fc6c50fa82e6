//! Tag markup scanner (XML)
//!
//! Shares the markup passes: `<!-- -->` comment suppression, the
//! `href`/`src`/`action` attribute pass, then the plain-text pass. XML
//! documents that reference URLs outside those attributes (element text,
//! other attributes) are covered by the boundary grammar.

use crate::scan::{attribute_pass, plain_text_pass, walk_lines, ScanContext, Scanner, Suppressor};
use crate::token::Url;

pub struct XmlScanner;

impl Scanner for XmlScanner {
    fn name(&self) -> &'static str {
        "xml"
    }

    fn scan(&self, text: &str, ctx: &mut ScanContext) -> Vec<Url> {
        let mut urls = Vec::new();
        let mut suppressor = Suppressor::html_comments();
        walk_lines(text, ctx, &mut urls, |line_no, line, ctx, urls| {
            let mask = suppressor.mask_line(line);
            attribute_pass(line, line_no, &mask, ctx, urls);
            plain_text_pass(line, line_no, &mask, ctx, urls);
        });
        urls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Scheme;

    fn scan(text: &str) -> Vec<Url> {
        XmlScanner.scan(text, &mut ScanContext::new())
    }

    #[test]
    fn element_text_urls_come_from_the_boundary_pass() {
        let urls = scan("<feed><link>https://example.com/feed.xml</link></feed>");
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].value, "https://example.com/feed.xml");
    }

    #[test]
    fn href_attributes_are_extracted() {
        let urls = scan(r#"<atom:link href="https://example.com/atom" rel="self"/>"#);
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].scheme, Scheme::Https);
    }

    #[test]
    fn commented_sections_yield_nothing() {
        let urls = scan("<!-- <link href=\"https://old.example.com\"/> -->\n<x>ftp://files.example.com/a</x>");
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].value, "ftp://files.example.com/a");
        assert_eq!(urls[0].scheme, Scheme::Ftp);
    }
}
