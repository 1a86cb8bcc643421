//! `trellis project`: internal service name to slug.

use serde::Serialize;
use trellis_core::application::CatalogService;

use crate::{error::CliResult, output::OutputManager};

#[derive(Debug, Serialize)]
struct Projected<'a> {
    name: &'a str,
    slug: &'static str,
}

pub fn execute(names: &[String], output: &OutputManager) -> CliResult<()> {
    let catalog = CatalogService::default();

    let projected = names
        .iter()
        .map(|name| {
            catalog.project(name).map(|slug| Projected {
                name,
                slug: slug.as_str(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if output.is_json() {
        output.json(&projected)?;
    } else if output.is_human() {
        for p in &projected {
            output.data(&format!("{} → {}", p.name, p.slug))?;
        }
    } else {
        for p in &projected {
            output.data(p.slug)?;
        }
    }

    Ok(())
}
