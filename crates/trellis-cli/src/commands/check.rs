//! `trellis check`: validate selection files.
//!
//! Every file is checked even after a failure so one run reports all of
//! them; the command fails afterwards if any file was invalid.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info};
use trellis_adapters::{FileSelectionSource, discover};
use trellis_core::{
    application::SelectionService,
    domain::{Selection, ServiceProjection},
    error::TrellisError,
};

use crate::{
    cli::CheckArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

use super::effective_policy;

/// Outcome for one file.
#[derive(Debug, Serialize)]
struct FileReport {
    path: PathBuf,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    services: Vec<ServiceProjection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip)]
    suggestions: Vec<String>,
}

impl FileReport {
    fn new(path: PathBuf, outcome: Result<Selection, TrellisError>) -> Self {
        match outcome {
            Ok(selection) => Self {
                path,
                valid: true,
                name: selection.name().map(str::to_owned),
                services: selection.projections(),
                error: None,
                suggestions: Vec::new(),
            },
            Err(err) => Self {
                path,
                valid: false,
                name: None,
                services: Vec::new(),
                error: Some(err.to_string()),
                suggestions: err.suggestions(),
            },
        }
    }
}

pub fn execute(args: &CheckArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let service = SelectionService::new(effective_policy(args.fallback, config));
    let files = collect_files(&args.paths)?;

    if files.is_empty() {
        return Err(CliError::InvalidInput {
            message: format!(
                "no .toml or .json selection files found in {}",
                display_paths(&args.paths)
            ),
            source: None,
        });
    }

    let reports: Vec<FileReport> = files
        .into_iter()
        .map(|path| {
            let outcome = service.load(&FileSelectionSource::new(&path));
            FileReport::new(path, outcome)
        })
        .collect();

    let failed = reports.iter().filter(|r| !r.valid).count();
    let total = reports.len();
    info!(total, failed, policy = %service.policy(), "Checked selection files");

    if output.is_json() {
        output.json(&reports)?;
    } else {
        print_reports(&reports, output)?;
    }

    if failed > 0 {
        return Err(CliError::CheckFailed { failed, total });
    }
    output.success(&format!("{total} selection file(s) valid"))?;
    Ok(())
}

/// Directories are expanded to the selection files inside them; other paths
/// are kept so a missing file is reported like any other failure.
fn collect_files(paths: &[PathBuf]) -> CliResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let found = discover(path)?;
            debug!(dir = %path.display(), count = found.len(), "Expanded directory");
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn print_reports(reports: &[FileReport], output: &OutputManager) -> CliResult<()> {
    for report in reports {
        let path = report.path.display();
        if report.valid {
            let label = report
                .name
                .as_deref()
                .map(|name| format!(" [{name}]"))
                .unwrap_or_default();
            let slugs: Vec<_> = report.services.iter().map(|s| s.as_str()).collect();
            output.success(&format!("{path}{label}: {}", slugs.join(", ")))?;
        } else {
            output.error(&format!(
                "{path}: {}",
                report.error.as_deref().unwrap_or("invalid")
            ))?;
            for suggestion in &report.suggestions {
                output.print(&format!("    {suggestion}"))?;
            }
        }
    }
    Ok(())
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use trellis_core::domain::{DomainError, SelectionRequest, UnknownPolicy};

    #[test]
    fn collect_expands_directories_and_keeps_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.toml"), "services = [\"vue\"]").unwrap();
        fs::write(temp.path().join("readme.md"), "").unwrap();
        let missing = temp.path().join("missing.json");

        let files = collect_files(&[temp.path().to_path_buf(), missing.clone()]).unwrap();
        assert_eq!(files, vec![temp.path().join("a.toml"), missing]);
    }

    #[test]
    fn report_for_valid_selection() {
        let selection = Selection::resolve(
            SelectionRequest::new("a.toml", ["react", "react-styled"]).with_name("ui"),
            UnknownPolicy::Reject,
        )
        .unwrap();

        let report = FileReport::new(PathBuf::from("a.toml"), Ok(selection));
        assert!(report.valid);
        assert_eq!(report.name.as_deref(), Some("ui"));
        assert_eq!(report.services, ["react", "react-styled"]);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["services"], serde_json::json!(["react", "react-styled"]));
        assert!(json.get("error").is_none());
    }

    #[test]
    fn report_for_invalid_selection() {
        let err: TrellisError = DomainError::EmptySelection {
            origin: "b.toml".into(),
        }
        .into();
        let report = FileReport::new(PathBuf::from("b.toml"), Err(err));
        assert!(!report.valid);
        assert_eq!(
            report.error.as_deref(),
            Some("selection from b.toml lists no services")
        );
        assert!(!report.suggestions.is_empty());
    }
}
