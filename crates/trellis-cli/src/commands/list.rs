//! Implementation of the `trellis list` command.

use trellis_core::application::{CatalogEntry, CatalogService};

use crate::{
    cli::{ListArgs, ListFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let catalog = CatalogService::default();

    let mut entries = match &args.filter {
        Some(query) => catalog.search(query),
        None => catalog.entries(),
    };
    if args.renamed {
        entries.retain(|entry| entry.renamed);
    }

    let format = args.format.unwrap_or(if output.is_json() {
        ListFormat::Json
    } else {
        config.output.list_format
    });

    match format {
        ListFormat::Table => {
            output.header(&format!("Services ({}):", entries.len()))?;
            for line in table_rows(&entries) {
                output.data(&line)?;
            }
            if entries.is_empty() {
                output.warning("No services match")?;
            }
        }

        // JSON goes through `data` so it stays parseable under --quiet.
        ListFormat::Json => output.json(&entries)?,

        ListFormat::List => {
            for entry in &entries {
                output.data(entry.slug)?;
            }
        }

        ListFormat::Csv => {
            output.data("name,slug,renamed")?;
            for entry in &entries {
                output.data(&format!("{},{},{}", entry.name, entry.slug, entry.renamed))?;
            }
        }
    }

    Ok(())
}

/// `NAME  slug` rows with the name column padded; renamed slugs are marked.
fn table_rows(entries: &[CatalogEntry]) -> Vec<String> {
    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
    entries
        .iter()
        .map(|entry| {
            let marker = if entry.renamed { "  (renamed)" } else { "" };
            format!("  {:<width$}  {}{marker}", entry.name, entry.slug)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_aligned() {
        let rows = table_rows(&CatalogService::default().search("vue"));
        assert_eq!(rows, ["  VUE         vue", "  VUE_STYLED  vue-styled"]);
    }

    #[test]
    fn renamed_rows_are_marked() {
        let rows = table_rows(&CatalogService::default().search("actuator"));
        assert_eq!(
            rows,
            ["  SPRINGBOOT_ACTUATOR  spring-boot-actuator  (renamed)"]
        );
    }

    #[test]
    fn empty_table() {
        assert!(table_rows(&[]).is_empty());
    }
}
