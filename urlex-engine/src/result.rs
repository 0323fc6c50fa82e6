//! Extraction results returned across the host boundary

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::format::FormatTag;
use crate::token::Url;

/// Outcome of one dispatcher call.
///
/// `success` and token presence are independent signals: a truncated scan
/// keeps its tokens and stays successful, while a size rejection has neither.
/// The record is returned by value and never mutated by the engine afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub success: bool,
    /// Tokens in detection order (source order within each scanner pass).
    pub urls: Vec<Url>,
    pub errors: Vec<ParseError>,
    /// The format the request resolved to.
    pub format: FormatTag,
}

impl ExtractionResult {
    /// Successful-by-default result; the dispatcher downgrades `success` when
    /// it records a fatal error.
    pub fn new(format: FormatTag, urls: Vec<Url>, errors: Vec<ParseError>) -> Self {
        let success = !errors.iter().any(ParseError::is_fatal);
        Self {
            success,
            urls,
            errors,
            format,
        }
    }

    /// Empty unsuccessful result carrying one error.
    pub fn failure(format: FormatTag, error: ParseError) -> Self {
        Self {
            success: false,
            urls: Vec::new(),
            errors: vec![error],
            format,
        }
    }

    /// Empty unsuccessful result with no recorded error (cancelled calls).
    pub fn cancelled(format: FormatTag) -> Self {
        Self {
            success: false,
            urls: Vec::new(),
            errors: Vec::new(),
            format,
        }
    }

    pub fn url_count(&self) -> usize {
        self.urls.len()
    }
}
