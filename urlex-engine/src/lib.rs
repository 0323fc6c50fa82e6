//! # urlex-engine
//!
//! URL extraction and classification for a dozen text formats. The engine
//! receives plain text plus a format tag (and an optional cancellation
//! handle) and returns a structured result; it never touches files, the
//! clipboard or the network, and it never fails — malformed input comes back
//! as a result with recorded parse errors.
//!
//! Layout:
//!
//! - [`classify`] / [`patterns`] - scheme classification and the shared
//!   token-boundary vocabulary
//! - [`scan`] - the per-format scanners
//! - [`dispatch`] - format resolution, size governance, cancellation
//! - [`postprocess`] - dedupe/group/sort utilities over token lists
//! - [`collect`] - the looser link-collection utility
//!
//! The entry point for hosts is [`extract`]:
//!
//! ```text
//! let result = urlex_engine::extract(document_text, "html", None);
//! for url in &result.urls { ... }
//! ```

pub mod classify;
pub mod collect;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod patterns;
pub mod postprocess;
pub mod result;
pub mod scan;
pub mod token;

pub use classify::{classify, extract_components, Scheme, UrlComponents};
pub use collect::collect_links;
pub use dispatch::{extract, MAX_CONTENT_CHARS, MAX_URL_COUNT};
pub use error::{ErrorCategory, ErrorSeverity, ParseError, RecoveryAction};
pub use format::FormatTag;
pub use result::ExtractionResult;
pub use token::{Position, Url, UrlKind};
