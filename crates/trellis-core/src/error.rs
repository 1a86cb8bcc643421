//! Unified error handling for Trellis Core.
//!
//! Wraps domain and application errors in one type that carries a display
//! category and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Trellis Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TrellisError {
    /// Invalid input against the closed service and slug sets.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Failures reading or decoding a selection source.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl TrellisError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {message}"),
                "Run `trellis config path` to see which file is loaded".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Trellis".into(),
                "Please report this issue at: https://github.com/cosecruz/trellis/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type TrellisResult<T> = Result<T, TrellisError>;
