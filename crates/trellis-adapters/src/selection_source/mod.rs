//! Selection sources: where service selections come from.
//!
//! # Document format
//!
//! The same shape in both formats; unknown keys are rejected.
//!
//! ```toml
//! name     = "shop"                         # optional
//! services = ["spring-boot", "mongodb"]     # required
//! ```
//!
//! ```json
//! { "name": "shop", "services": ["spring-boot", "mongodb"] }
//! ```
//!
//! Sources only decode. Slugs are validated by
//! `trellis_core::application::SelectionService`.

mod file;
mod memory;

use std::{
    fmt,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};
use walkdir::{DirEntry, WalkDir};

use trellis_core::{application::ApplicationError, error::TrellisResult};

pub use file::{FileSelectionSource, SelectionDocument};
pub use memory::InMemorySelectionSource;

// ── Format ────────────────────────────────────────────────────────────────────

/// Encoding of a selection file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionFormat {
    Toml,
    Json,
}

impl SelectionFormat {
    pub const ALL: [SelectionFormat; 2] = [Self::Toml, Self::Json];

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }

    /// Pick the format from `path`'s extension. Matching ignores case.
    pub fn from_path(path: &Path) -> TrellisResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        Self::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(extension))
            .ok_or_else(|| {
                ApplicationError::UnsupportedFormat {
                    path: path.to_path_buf(),
                    extension: extension.to_owned(),
                }
                .into()
            })
    }
}

impl fmt::Display for SelectionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

// ── Discovery ─────────────────────────────────────────────────────────────────

/// Every `.toml` / `.json` file under `dir`, sorted, skipping hidden entries.
#[instrument(skip_all, fields(dir = %dir.display()))]
pub fn discover(dir: &Path) -> TrellisResult<Vec<PathBuf>> {
    let mut found = Vec::new();

    let walker = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    for entry in walker {
        let entry = entry.map_err(|e| ApplicationError::SourceUnavailable {
            origin: dir.display().to_string(),
            reason: e.to_string(),
        })?;

        if entry.file_type().is_file() && SelectionFormat::from_path(entry.path()).is_ok() {
            found.push(entry.into_path());
        }
    }

    found.sort();
    debug!(count = found.len(), "Discovered selection files");
    Ok(found)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}
