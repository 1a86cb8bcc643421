//! Trellis Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Trellis
//! service catalogue: the closed set of services a generated project can be
//! built from, and the bijective table between each service and its external
//! slug.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           trellis-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (CatalogService, SelectionService)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │        (Driven: SelectionSource)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     trellis-adapters (Infrastructure)   │
//! │ (FileSelectionSource, InMemory...)      │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Service, ServiceProjection, Selection) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use trellis_core::prelude::*;
//!
//! let slug = to_projection(Service::SpringBootJwt);
//! assert_eq!(slug.as_str(), "spring-boot-jwt");
//! assert_eq!(from_projection(slug), Service::SpringBootJwt);
//!
//! assert!(parse_projection("Spring-Boot-Jwt").is_err());
//! assert_eq!(
//!     resolve_projection("kafka", UnknownPolicy::Fallback).unwrap(),
//!     Service::Unknown
//! );
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CatalogEntry, CatalogService, SelectionService, ports::SelectionSource,
    };
    pub use crate::domain::{
        DomainError, Selection, SelectionRequest, Service, ServiceProjection, UnknownPolicy,
        from_projection, parse_projection, resolve_projection, to_projection,
    };
    pub use crate::error::{ErrorCategory, TrellisError, TrellisResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
