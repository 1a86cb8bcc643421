//! `trellis resolve`: slug to internal service name.

use serde::Serialize;
use tracing::warn;
use trellis_core::{
    application::CatalogService,
    domain::{Service, UnknownPolicy},
};

use crate::{cli::ResolveArgs, config::AppConfig, error::CliResult, output::OutputManager};

use super::effective_policy;

#[derive(Debug, Serialize)]
struct Resolved<'a> {
    slug: &'a str,
    name: &'static str,
}

impl Resolved<'_> {
    /// True when the fallback policy stood in for a slug outside the table.
    fn was_substituted(&self) -> bool {
        let unknown = Service::Unknown;
        self.name == unknown.name() && unknown.projection() != self.slug
    }
}

pub fn execute(args: &ResolveArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let policy = effective_policy(args.fallback, config);
    let catalog = CatalogService::new(policy);

    let resolved = args
        .slugs
        .iter()
        .map(|slug| {
            catalog.resolve(slug).map(|service| Resolved {
                slug,
                name: service.name(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if policy == UnknownPolicy::Fallback {
        for r in resolved.iter().filter(|r| r.was_substituted()) {
            warn!(slug = r.slug, "Unrecognised slug mapped to UNKNOWN");
        }
    }

    if output.is_json() {
        output.json(&resolved)?;
    } else if output.is_human() {
        for r in &resolved {
            output.data(&format!("{} → {}", r.slug, r.name))?;
        }
    } else {
        for r in &resolved {
            output.data(r.name)?;
        }
    }

    Ok(())
}
