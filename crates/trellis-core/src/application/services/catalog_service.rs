//! Catalog Service - read-only queries over the projection table.

use serde::Serialize;
use tracing::debug;

use crate::{
    domain::{PROJECTION_REGISTRY, Service, ServiceProjection, UnknownPolicy, resolve_projection},
    error::TrellisResult,
};

/// One row of the catalogue, for display and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    #[serde(skip)]
    pub service: Service,
    pub name: &'static str,
    pub slug: &'static str,
    pub renamed: bool,
}

/// Service for catalogue lookups.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogService {
    policy: UnknownPolicy,
}

impl CatalogService {
    /// Create a catalogue that resolves slugs under `policy`.
    pub fn new(policy: UnknownPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> UnknownPolicy {
        self.policy
    }

    /// Every service with its slug, in registry order.
    pub fn entries(&self) -> Vec<CatalogEntry> {
        PROJECTION_REGISTRY
            .iter()
            .map(|def| CatalogEntry {
                service: def.service,
                name: def.service.name(),
                slug: def.slug,
                renamed: def.renamed,
            })
            .collect()
    }

    /// Entries whose name or slug contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<CatalogEntry> {
        let needle = query.to_ascii_lowercase();
        self.entries()
            .into_iter()
            .filter(|entry| {
                entry.slug.contains(&needle) || entry.name.to_ascii_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Internal name → slug.
    pub fn project(&self, name: &str) -> TrellisResult<ServiceProjection> {
        let service = Service::from_name(name)?;
        debug!(name, slug = %service.projection(), "Projected service");
        Ok(service.projection())
    }

    /// Slug → service, under the configured policy.
    pub fn resolve(&self, slug: &str) -> TrellisResult<Service> {
        let service = resolve_projection(slug, self.policy)?;
        debug!(slug, service = service.name(), policy = %self.policy, "Resolved slug");
        Ok(service)
    }
}
