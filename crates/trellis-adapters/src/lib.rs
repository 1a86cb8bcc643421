//! Infrastructure adapters for Trellis.
//!
//! This crate implements the ports defined in `trellis-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod selection_source;

// Re-export commonly used adapters
pub use selection_source::{
    FileSelectionSource, InMemorySelectionSource, SelectionDocument, SelectionFormat, discover,
};
