//! Dispatcher: format resolution, size governance, cancellation
//!
//! The single entry point of the engine. Selects the scanner for a resolved
//! format tag, applies the pre-flight size ceiling and the post-scan count
//! ceiling, and packages everything into an [`ExtractionResult`]. The
//! operation is synchronous and total: any textual input, however malformed,
//! comes back as a result, never as a failure.
//!
//! Cancellation is cooperative and consulted at exactly two points — before
//! size validation and immediately before the scanner runs — never mid-scan.
//! A scan already in progress always runs to completion; cancellation only
//! prevents one from starting.

use std::panic::{self, AssertUnwindSafe};

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::{ParseError, RecoveryAction};
use crate::format::FormatTag;
use crate::result::ExtractionResult;
use crate::scan::{
    CssScanner, HtmlScanner, JsonScanner, MarkdownScanner, PropertiesScanner, ScanContext,
    Scanner, ScriptScanner, SectionScanner, TableScanner, XmlScanner, YamlScanner,
};

/// Hard input ceiling, in characters. Documents over this are rejected
/// before any scanner runs. Fixed, independent of user configuration.
pub const MAX_CONTENT_CHARS: usize = 10_000_000;

/// Hard output ceiling. Scans yielding more tokens are truncated to exactly
/// this many, in scan order. Fixed, independent of user configuration.
pub const MAX_URL_COUNT: usize = 50_000;

fn scanner_for(format: FormatTag) -> &'static dyn Scanner {
    match format {
        FormatTag::Html => &HtmlScanner,
        FormatTag::Css => &CssScanner,
        FormatTag::Javascript | FormatTag::Typescript => &ScriptScanner,
        FormatTag::Json => &JsonScanner,
        FormatTag::Yaml => &YamlScanner,
        FormatTag::Properties => &PropertiesScanner,
        FormatTag::Toml => &TableScanner,
        FormatTag::Ini => &SectionScanner,
        FormatTag::Xml => &XmlScanner,
        FormatTag::Markdown | FormatTag::Unknown => &MarkdownScanner,
    }
}

/// Whether `content` exceeds [`MAX_CONTENT_CHARS`]. The byte length is a
/// lower bound on the character count, so documents that fit in bytes skip
/// the exact count entirely.
fn exceeds_content_ceiling(content: &str) -> bool {
    content.len() > MAX_CONTENT_CHARS && content.chars().count() > MAX_CONTENT_CHARS
}

/// Extract every URL token from `content`, treating it as `format_tag`.
///
/// Always returns a result: size rejections, scanner failures and
/// truncations are reported inside it. See the module docs for the
/// cancellation points.
pub fn extract(
    content: &str,
    format_tag: &str,
    cancel: Option<&CancellationToken>,
) -> ExtractionResult {
    if cancel.is_some_and(CancellationToken::is_cancelled) {
        debug!(tag = format_tag, "extraction cancelled before it started");
        return ExtractionResult::cancelled(FormatTag::Unknown);
    }

    if exceeds_content_ceiling(content) {
        warn!(
            length = content.len(),
            ceiling = MAX_CONTENT_CHARS,
            "content over the size ceiling, not scanning"
        );
        return ExtractionResult::failure(
            FormatTag::resolve(format_tag),
            ParseError::error(
                format!(
                    "content is {} characters, over the {} character ceiling; \
                     split the document and extract the parts separately",
                    content.chars().count(),
                    MAX_CONTENT_CHARS
                ),
                RecoveryAction::UserAction,
            ),
        );
    }

    let format = FormatTag::resolve(format_tag);
    let scanner = scanner_for(format);

    if cancel.is_some_and(CancellationToken::is_cancelled) {
        debug!(format = %format, "extraction cancelled before the scan started");
        return ExtractionResult::cancelled(format);
    }

    debug!(format = %format, length = content.len(), scanner = scanner.name(), "scanning");

    let mut ctx = ScanContext::new();
    let scanned = panic::catch_unwind(AssertUnwindSafe(|| scanner.scan(content, &mut ctx)));

    let mut urls = match scanned {
        Ok(urls) => urls,
        Err(_) => {
            warn!(format = %format, scanner = scanner.name(), "scanner failed, discarding partial results");
            return ExtractionResult::failure(
                format,
                ParseError::error(
                    format!(
                        "the {} scanner failed unexpectedly and no URLs were extracted; \
                         check the document for malformed content",
                        scanner.name()
                    ),
                    RecoveryAction::Abort,
                ),
            );
        }
    };

    let mut errors = ctx.take_errors();
    if urls.len() > MAX_URL_COUNT {
        let found = urls.len();
        urls.truncate(MAX_URL_COUNT);
        warn!(found, kept = MAX_URL_COUNT, "token count over the ceiling, truncating");
        errors.push(ParseError::warning(
            format!("found {found} URLs, kept the first {MAX_URL_COUNT}"),
            RecoveryAction::Truncate,
        ));
    }

    debug!(format = %format, count = urls.len(), errors = errors.len(), "scan finished");
    ExtractionResult::new(format, urls, errors)
}
