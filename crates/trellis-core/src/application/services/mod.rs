//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "list the catalogue" or "check a selection".

pub mod catalog_service;
pub mod selection_service;

pub use catalog_service::{CatalogEntry, CatalogService};
pub use selection_service::SelectionService;
