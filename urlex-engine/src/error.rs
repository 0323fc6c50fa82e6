//! Parse error records surfaced across the host boundary
//!
//! The engine never returns a bare failure: every problem it hits is recorded
//! as a [`ParseError`] inside the extraction result. Errors are created
//! synchronously during or immediately after a scan attempt, are never
//! retried automatically, and always carry a human-actionable message rather
//! than a raw panic payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error category. Everything this engine reports is a parsing problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorCategory {
    Parsing,
}

/// Severity attached to a parse error.
///
/// `Warning` marks locally recovered degradations (skipped line, structural
/// fallback, truncation); `Error` marks problems that made the call
/// unsuccessful (input over the size ceiling, scanner failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorSeverity {
    Warning,
    Error,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
        }
    }
}

/// Suggested recovery action attached to every parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecoveryAction {
    Truncate,
    Skip,
    Retry,
    Fallback,
    Abort,
    UserAction,
}

impl RecoveryAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecoveryAction::Truncate => "truncate",
            RecoveryAction::Skip => "skip",
            RecoveryAction::Retry => "retry",
            RecoveryAction::Fallback => "fallback",
            RecoveryAction::Abort => "abort",
            RecoveryAction::UserAction => "user-action",
        }
    }
}

impl fmt::Display for RecoveryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single recorded parse failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseError {
    pub category: ErrorCategory,
    pub severity: ErrorSeverity,
    pub message: String,
    pub recoverable: bool,
    pub recovery: RecoveryAction,
    pub timestamp: DateTime<Utc>,
}

impl ParseError {
    pub fn new(
        severity: ErrorSeverity,
        message: impl Into<String>,
        recovery: RecoveryAction,
    ) -> Self {
        Self {
            category: ErrorCategory::Parsing,
            severity,
            message: message.into(),
            recoverable: true,
            recovery,
            timestamp: Utc::now(),
        }
    }

    /// Warning-severity record for a locally recovered degradation.
    pub fn warning(message: impl Into<String>, recovery: RecoveryAction) -> Self {
        Self::new(ErrorSeverity::Warning, message, recovery)
    }

    /// Error-severity record for a problem that makes the call unsuccessful.
    pub fn error(message: impl Into<String>, recovery: RecoveryAction) -> Self {
        Self::new(ErrorSeverity::Error, message, recovery)
    }

    /// Whether this record flips the result's success flag.
    pub fn is_fatal(&self) -> bool {
        self.severity == ErrorSeverity::Error
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [parsing]: {} (recovery: {})",
            self.severity, self.message, self.recovery
        )
    }
}

impl std::error::Error for ParseError {}
