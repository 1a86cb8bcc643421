//! Application layer errors.
//!
//! These errors represent failures in reaching or decoding a selection
//! source, not invalid selections. Those are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while loading selections.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The source could not be read at all.
    #[error("cannot read selection from {origin}: {reason}")]
    SourceUnavailable { origin: String, reason: String },

    /// The source was read but is not a valid selection document.
    #[error("malformed selection in {origin}: {reason}")]
    MalformedSource { origin: String, reason: String },

    /// No decoder for the file extension.
    #[error("unsupported selection format '{extension}' for {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// Validation failed (application-level, not domain).
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SourceUnavailable { origin, .. } => vec![
                format!("Failed to access: {origin}"),
                "Check that the path exists and is readable".into(),
            ],
            Self::MalformedSource { .. } => vec![
                "A selection file has an optional `name` and a `services` list".into(),
                "Example: services = [\"spring-boot\", \"postgresql\"]".into(),
            ],
            Self::UnsupportedFormat { .. } => {
                vec!["Use a .toml or .json selection file".into()]
            }
            Self::ValidationFailed(_) => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SourceUnavailable { .. } => ErrorCategory::NotFound,
            Self::MalformedSource { .. }
            | Self::UnsupportedFormat { .. }
            | Self::ValidationFailed(_) => ErrorCategory::Validation,
        }
    }
}
