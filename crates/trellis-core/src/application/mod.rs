//! Application layer for Trellis.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (CatalogService, SelectionService)
//! - **Ports**: Interface definitions (traits) for selection sources
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. The slug table and selection rules live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    CatalogEntry, // DTO for catalogue listings
    CatalogService,
    SelectionService,
};

// Re-export port traits (for adapter implementation)
pub use ports::SelectionSource;

pub use error::ApplicationError;
