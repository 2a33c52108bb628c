//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers all error
//! cases in the library, following the single-error-type pattern used by
//! crates like `reqwest`, `serde_json`, and `csv`.
//!
//! # Error Handling Philosophy
//!
//! - Per-line problems inside an export (a timestamp that matches no known
//!   pattern) are *not* errors: the parser drops the line with a warning.
//! - Whole-input problems (nothing in the file looks like a message) are
//!   surfaced as [`ChatlensError::Parse`].
//! - Bad caller input (an unknown locale hint, a malformed filter date) is
//!   surfaced immediately, before any parsing work happens.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The export file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing a report)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The export contained text but no line matched any known
    /// message-start pattern.
    ///
    /// This is the "total parse failure" case: the file is probably not a
    /// chat export, or it uses a format the parser doesn't know.
    #[error("Failed to parse chat export{}: {message}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// Description of what went wrong
        message: String,
        /// The file path, if parsing started from one
        path: Option<PathBuf>,
    },

    /// The export was recognized but is structurally unusable.
    #[error("Invalid export: {message}")]
    InvalidFormat {
        /// Description of what's wrong
        message: String,
    },

    /// Unknown locale hint for date ordering.
    ///
    /// The parser never guesses whether `12/1/23` is December 1st or
    /// January 12th; callers must say. Accepted hints are `day-first`
    /// and `month-first`.
    #[error("Unknown date order '{input}'. Expected 'day-first' or 'month-first'")]
    InvalidDateOrder {
        /// The hint string that was provided
        input: String,
    },

    /// Invalid date in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// CSV report writing error.
    #[cfg(feature = "csv-report")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON report serialization error.
    #[cfg(feature = "json-report")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates a whole-input parse failure.
    pub fn parse(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        ChatlensError::Parse {
            message: message.into(),
            path,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            message: message.into(),
        }
    }

    /// Creates an invalid date-order error.
    pub fn invalid_date_order(input: impl Into<String>) -> Self {
        ChatlensError::InvalidDateOrder {
            input: input.into(),
        }
    }

    /// Creates an invalid filter-date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatlensError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is a whole-input parse failure.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatlensError::Parse { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatlensError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a locale-hint error.
    pub fn is_invalid_date_order(&self) -> bool {
        matches!(self, ChatlensError::InvalidDateOrder { .. })
    }

    /// Returns `true` if this is a filter-date error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatlensError::InvalidDate { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
