//! Algebraic properties of the post-processing utilities.

use proptest::prelude::*;
use urlex_engine::postprocess::{
    dedupe, dedupe_lines, sort_by_length, sort_by_scheme, sort_by_value, sort_lines,
};
use urlex_engine::{Scheme, Url};

fn url_values() -> impl Strategy<Value = Vec<Url>> {
    let value = proptest::string::string_regex("[ ]?[a-zA-Z0-9./:-]{1,20}[ ]?")
        .expect("value strategy is a valid pattern");
    proptest::collection::vec(
        (value, proptest::sample::select(vec![
            Scheme::Https,
            Scheme::Http,
            Scheme::Ftp,
            Scheme::Mailto,
            Scheme::Unrecognized,
        ])),
        0..40,
    )
    .prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(value, scheme)| Url::new(value, scheme))
            .collect()
    })
}

proptest! {
    #[test]
    fn dedupe_is_idempotent(urls in url_values()) {
        let once = dedupe(urls);
        let twice = dedupe(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn dedupe_keeps_first_occurrence_order(urls in url_values()) {
        let deduped = dedupe(urls.clone());
        // every survivor appears in the input, in the same relative order
        let mut input = urls.iter();
        for survivor in &deduped {
            prop_assert!(input.any(|u| u == survivor));
        }
    }

    #[test]
    fn sort_by_value_is_idempotent(urls in url_values()) {
        let once = sort_by_value(urls);
        let twice = sort_by_value(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sort_by_length_orders_lengths_and_breaks_ties_on_value(urls in url_values()) {
        let sorted = sort_by_length(urls);
        for pair in sorted.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let (la, lb) = (a.value.chars().count(), b.value.chars().count());
            prop_assert!(la < lb || (la == lb && a.value <= b.value));
        }
    }

    #[test]
    fn sort_by_scheme_groups_schemes_contiguously(urls in url_values()) {
        let sorted = sort_by_scheme(urls);
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].scheme <= pair[1].scheme);
        }
    }

    #[test]
    fn line_dedupe_is_idempotent(lines in proptest::collection::vec("[a-z./:]{1,12}", 0..20)) {
        let text = lines.join("\n");
        let once = dedupe_lines(&text);
        prop_assert_eq!(dedupe_lines(&once), once.clone());
    }

    #[test]
    fn line_sort_is_idempotent(lines in proptest::collection::vec("[a-z./:]{1,12}", 0..20)) {
        let text = lines.join("\n");
        let once = sort_lines(&text);
        prop_assert_eq!(sort_lines(&once), once.clone());
    }
}

#[test]
fn dedupe_preserves_the_first_seen_context() {
    let urls = vec![
        Url::new("https://a.com", Scheme::Https).with_context("first sighting"),
        Url::new("HTTPS://A.COM", Scheme::Https).with_context("second sighting"),
    ];
    let deduped = dedupe(urls);
    assert_eq!(deduped.len(), 1);
    assert_eq!(deduped[0].context.as_deref(), Some("first sighting"));
}
