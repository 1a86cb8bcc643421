//! Driven (output) ports - implemented by infrastructure.
//!
//! The `trellis-adapters` crate provides implementations.

use crate::domain::SelectionRequest;
use crate::error::TrellisResult;

/// Port for anything that yields an unvalidated service selection.
///
/// Implemented by:
/// - `trellis_adapters::selection_source::FileSelectionSource` (TOML/JSON files)
/// - `trellis_adapters::selection_source::InMemorySelectionSource` (tests, inline input)
///
/// Implementations only decode; slug validation happens in
/// [`crate::domain::Selection::resolve`].
#[cfg_attr(test, mockall::automock)]
pub trait SelectionSource: Send + Sync {
    /// Human-readable origin used in error messages, e.g. a path.
    fn origin(&self) -> String;

    /// Read the raw selection.
    fn load(&self) -> TrellisResult<SelectionRequest>;
}
