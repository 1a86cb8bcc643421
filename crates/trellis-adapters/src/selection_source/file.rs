//! File-backed selection source.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, instrument};

use trellis_core::{
    application::{ApplicationError, ports::SelectionSource},
    domain::SelectionRequest,
    error::TrellisResult,
};

use super::SelectionFormat;

/// Deserialised selection file. Slugs stay raw strings here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectionDocument {
    pub name: Option<String>,
    pub services: Vec<String>,
}

impl SelectionDocument {
    /// Decode `content` as `format`. Errors are the decoder's message.
    pub fn parse(content: &str, format: SelectionFormat) -> Result<Self, String> {
        match format {
            SelectionFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            SelectionFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        }
    }

    pub fn into_request(self, origin: impl Into<String>) -> SelectionRequest {
        SelectionRequest {
            origin: origin.into(),
            name: self.name,
            services: self.services,
        }
    }
}

/// A selection stored in a `.toml` or `.json` file.
#[derive(Debug, Clone)]
pub struct FileSelectionSource {
    path: PathBuf,
}

impl FileSelectionSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SelectionSource for FileSelectionSource {
    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> TrellisResult<SelectionRequest> {
        let format = SelectionFormat::from_path(&self.path)?;

        let content =
            fs::read_to_string(&self.path).map_err(|e| ApplicationError::SourceUnavailable {
                origin: self.origin(),
                reason: e.to_string(),
            })?;

        let document = SelectionDocument::parse(&content, format).map_err(|reason| {
            ApplicationError::MalformedSource {
                origin: self.origin(),
                reason,
            }
        })?;

        debug!(%format, entries = document.services.len(), "Decoded selection file");
        Ok(document.into_request(self.origin()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use trellis_core::error::TrellisError;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_toml() {
        let temp = TempDir::new().unwrap();
        let path = write(
            &temp,
            "shop.toml",
            "name = \"shop\"\nservices = [\"spring-boot\", \"mongodb\"]\n",
        );

        let request = FileSelectionSource::new(&path).load().unwrap();
        assert_eq!(request.name.as_deref(), Some("shop"));
        assert_eq!(request.services, ["spring-boot", "mongodb"]);
        assert_eq!(request.origin, path.display().to_string());
    }

    #[test]
    fn loads_json_without_name() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "ui.json", r#"{ "services": ["react", "Vue"] }"#);

        let request = FileSelectionSource::new(path).load().unwrap();
        assert_eq!(request.name, None);
        // Raw strings are kept as-is; case is checked later.
        assert_eq!(request.services, ["react", "Vue"]);
    }

    #[test]
    fn missing_file_is_unavailable() {
        let temp = TempDir::new().unwrap();
        let err = FileSelectionSource::new(temp.path().join("nope.toml"))
            .load()
            .unwrap_err();
        assert!(matches!(
            err,
            TrellisError::Application(ApplicationError::SourceUnavailable { .. })
        ));
    }

    #[test]
    fn unknown_keys_are_malformed() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "x.toml", "services = []\nservice = [\"vue\"]\n");

        let err = FileSelectionSource::new(path).load().unwrap_err();
        let TrellisError::Application(ApplicationError::MalformedSource { reason, .. }) = err
        else {
            panic!("expected MalformedSource, got {err:?}");
        };
        assert!(reason.contains("service"), "{reason}");
    }

    #[test]
    fn missing_services_is_malformed() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "x.json", r#"{ "name": "empty" }"#);
        assert!(matches!(
            FileSelectionSource::new(path).load(),
            Err(TrellisError::Application(
                ApplicationError::MalformedSource { .. }
            ))
        ));
    }

    #[test]
    fn extension_is_checked_before_reading() {
        let err = FileSelectionSource::new("/does/not/matter.yaml")
            .load()
            .unwrap_err();
        assert!(matches!(
            err,
            TrellisError::Application(ApplicationError::UnsupportedFormat { .. })
        ));
    }
}
