// ============================================================================
// domain/error.rs - PROJECTION AND SELECTION ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::projection::ServiceProjection;
use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (selection errors are collected, then reported together)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Lookup Errors (input outside the closed sets)
    // ========================================================================
    /// A raw string is not in the closed slug set.
    #[error("unknown service projection '{value}'")]
    UnknownProjection {
        value: String,
        /// A slug the value matches once normalised, if any.
        suggestion: Option<&'static str>,
    },

    #[error("unknown service name '{name}'")]
    UnknownService { name: String },

    #[error("unknown projection policy '{value}' (expected 'reject' or 'fallback')")]
    InvalidPolicy { value: String },

    // ========================================================================
    // Selection Errors
    // ========================================================================

    #[error("service '{service}' is selected more than once")]
    DuplicateService { service: String },

    #[error("selection from {origin} lists no services")]
    EmptySelection { origin: String },

    #[error("selection from {origin} is invalid: {}", join_problems(.problems))]
    InvalidSelection {
        origin: String,
        problems: Vec<DomainError>,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownProjection { suggestion, .. } => {
                let mut out = Vec::new();
                if let Some(slug) = suggestion {
                    out.push(format!("Did you mean '{slug}'?"));
                }
                out.push("Slugs are lowercase, hyphen-separated and case-sensitive".into());
                out.push(format!(
                    "Accepted values: {}",
                    ServiceProjection::accepted().join(", ")
                ));
                out
            }
            Self::UnknownService { .. } => vec![
                "Service names are upper-case with underscores, e.g. SPRINGBOOT_JWT".into(),
                "Try: trellis list".into(),
            ],
            Self::InvalidPolicy { .. } => vec![
                "Use 'reject' to fail on unknown slugs".into(),
                "Use 'fallback' to map them to 'unknown'".into(),
            ],
            Self::DuplicateService { service } => {
                vec![format!("Remove the repeated '{service}' entry")]
            }
            Self::EmptySelection { .. } => vec![
                "Add at least one slug to the `services` list".into(),
                "Try: trellis list".into(),
            ],
            Self::InvalidSelection { problems, .. } => {
                let mut out: Vec<String> = problems.iter().map(|p| format!("• {p}")).collect();
                if let Some(hint) = problems.iter().find_map(|p| match p {
                    Self::UnknownProjection {
                        suggestion: Some(slug),
                        value,
                    } => Some(format!("Did you mean '{slug}' instead of '{value}'?")),
                    _ => None,
                }) {
                    out.push(hint);
                }
                out.push("Try: trellis list".into());
                out
            }
        }
    }

    /// Error category for CLI display styling.
    ///
    /// Every domain failure is caused by input the caller can fix.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownProjection { .. }
            | Self::UnknownService { .. }
            | Self::InvalidPolicy { .. }
            | Self::DuplicateService { .. }
            | Self::EmptySelection { .. }
            | Self::InvalidSelection { .. } => ErrorCategory::Validation,
        }
    }
}

fn join_problems(problems: &[DomainError]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
