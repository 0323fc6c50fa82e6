//! Dispatcher-level behavior: totality, ceilings, cancellation, and the
//! per-format examples a host relies on.

use tokio_util::sync::CancellationToken;
use urlex_engine::{
    extract, ErrorSeverity, FormatTag, RecoveryAction, Scheme, MAX_CONTENT_CHARS, MAX_URL_COUNT,
};

#[test]
fn extraction_is_total_over_malformed_input() {
    let nasty = [
        "",
        "\0\0\0",
        "<<<<>>>>",
        "https://",
        "]]]](((( \u{1F600} \t\r\n",
        "key=value\n[broken",
    ];
    for (i, content) in nasty.iter().enumerate() {
        for tag in ["html", "css", "javascript", "json", "yaml", "toml", "ini", "xml", "markdown", "???"] {
            let result = extract(content, tag, None);
            assert!(result.url_count() <= MAX_URL_COUNT, "case {i} tag {tag}");
        }
    }
}

#[test]
fn content_over_the_ceiling_is_rejected_before_scanning() {
    let content = "a".repeat(MAX_CONTENT_CHARS + 1);
    let result = extract(&content, "markdown", None);
    assert!(!result.success);
    assert!(result.urls.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].severity, ErrorSeverity::Error);
    assert_eq!(result.errors[0].recovery, RecoveryAction::UserAction);
    assert!(result.errors[0].message.contains("10000000"));
}

#[test]
fn content_at_exactly_the_ceiling_is_scanned() {
    let mut content = String::from("https://example.com/ok\n");
    content.push_str(&"b".repeat(MAX_CONTENT_CHARS - content.len()));
    assert_eq!(content.len(), MAX_CONTENT_CHARS);
    let result = extract(&content, "markdown", None);
    assert!(result.success);
    assert_eq!(result.url_count(), 1);
}

#[test]
fn output_over_the_count_ceiling_is_truncated_and_still_successful() {
    let mut content = String::new();
    for i in 0..(MAX_URL_COUNT + 10) {
        content.push_str(&format!("https://example.com/page/{i}\n"));
    }
    let result = extract(&content, "json", None);
    assert!(result.success);
    assert_eq!(result.url_count(), MAX_URL_COUNT);
    let truncations: Vec<_> = result
        .errors
        .iter()
        .filter(|e| e.recovery == RecoveryAction::Truncate)
        .collect();
    assert_eq!(truncations.len(), 1);
    assert!(truncations[0].message.contains("50000"));
    // truncation keeps scan order
    assert_eq!(result.urls[0].value, "https://example.com/page/0");
}

#[test]
fn markup_example_yields_one_web_token() {
    let result = extract(r#"<a href="https://example.com">x</a>"#, "html", None);
    assert!(result.success);
    assert_eq!(result.url_count(), 1);
    assert_eq!(result.urls[0].value, "https://example.com");
    assert_eq!(result.urls[0].scheme, Scheme::Https);
}

#[test]
fn commented_markup_is_excluded() {
    let result = extract(
        r#"<!-- https://hidden.com --><a href="https://seen.com">x</a>"#,
        "html",
        None,
    );
    assert_eq!(result.url_count(), 1);
    assert_eq!(result.urls[0].value, "https://seen.com");
}

#[test]
fn fenced_code_is_excluded() {
    let result = extract("```\nhttps://example.com\n```", "markdown", None);
    assert!(result.success);
    assert_eq!(result.url_count(), 0);
}

#[test]
fn pre_signalled_cancellation_yields_an_empty_unsuccessful_result() {
    let token = CancellationToken::new();
    token.cancel();
    let result = extract("<a href=\"https://example.com\">x</a>", "html", Some(&token));
    assert!(!result.success);
    assert_eq!(result.url_count(), 0);
    assert_eq!(result.format, FormatTag::Unknown);
}

#[test]
fn structural_fallback_is_a_warning_not_a_failure() {
    let result = extract("not [valid toml\nurl = https://a.example.com\n", "toml", None);
    assert!(result.success);
    assert_eq!(result.url_count(), 1);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].severity, ErrorSeverity::Warning);
    assert_eq!(result.errors[0].recovery, RecoveryAction::Fallback);
}

#[test]
fn positions_index_lines_and_columns_from_one() {
    let result = extract("first\nsecond https://example.com/x tail\n", "markdown", None);
    assert_eq!(result.url_count(), 1);
    let position = result.urls[0].position.expect("line-sourced tokens carry a position");
    assert_eq!(position.line, 2);
    assert_eq!(position.column, 8);
    assert_eq!(
        result.urls[0].context.as_deref(),
        Some("second https://example.com/x tail")
    );
}

#[test]
fn detection_order_follows_the_source() {
    let content = "https://b.example.com\nhttps://a.example.com\nmailto:x@example.com";
    let result = extract(content, "markdown", None);
    let values: Vec<_> = result.urls.iter().map(|u| u.value.as_str()).collect();
    assert_eq!(
        values,
        vec![
            "https://b.example.com",
            "https://a.example.com",
            "mailto:x@example.com"
        ]
    );
}
