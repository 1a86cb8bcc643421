// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Trellis.
//!
//! Pure data and lookups: the closed [`Service`] set, its slug table and the
//! validation of service selections. No I/O happens here; files and other
//! sources are reached through ports in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Minimal crates**: std plus thiserror and serde
//! - **Immutable values**: `Service` and `ServiceProjection` are `Copy`
pub mod error;
pub mod projection;
pub mod selection;
pub mod service;

pub use error::DomainError;
pub use projection::{
    PROJECTION_REGISTRY, ProjectionDef, ProjectionTable, ServiceProjection, UnknownPolicy,
    from_projection, parse_projection, resolve_projection, to_projection,
};
pub use selection::{Selection, SelectionRequest};
pub use service::Service;
