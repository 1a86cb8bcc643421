//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `TRELLIS__<SECTION>__<KEY>`, e.g.
//!    `TRELLIS__PROJECTION__UNKNOWN_POLICY=fallback`
//! 3. Config file: the `--config` path (must exist) or the default path
//!    (optional)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use trellis_core::domain::UnknownPolicy;

use crate::cli::ListFormat;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "TRELLIS";

/// File name used by `init --local` and as the fallback location.
pub const LOCAL_CONFIG_FILE: &str = ".trellis.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Slug resolution settings.
    pub projection: ProjectionConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Policy when `--fallback` is not given.
    pub unknown_policy: UnknownPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Format for `list` when `--format` is not given.
    pub list_format: ListFormat,
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// `config_file` is the path from `--config`; when `None` the default
    /// location is used if it exists.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::config_path(), false),
        };

        if required && !path.is_file() {
            anyhow::bail!("config file not found: {}", path.display());
        }

        let defaults = Self::default();
        let config = Config::builder()
            .set_default(
                "projection.unknown_policy",
                defaults.projection.unknown_policy.as_str(),
            )?
            .set_default("output.no_color", defaults.output.no_color)?
            .set_default("output.list_format", defaults.output.list_format.as_str())?
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let loaded: Self = config
            .try_deserialize()
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        if path.is_file() {
            info!(path = %path.display(), "Loaded config file");
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
        }
        Ok(loaded)
    }

    /// Path read when `--config` is not given: `.trellis.toml` in the
    /// current directory if present, else [`AppConfig::global_config_path`].
    pub fn config_path() -> PathBuf {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            local
        } else {
            Self::global_config_path()
        }
    }

    /// Per-user config file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.trellis.toml` in the current directory.
    pub fn global_config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "trellis", "trellis")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Value of a dotted key, as shown by `config get`.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "projection.unknown_policy" => Some(self.projection.unknown_policy.to_string()),
            "output.no_color" => Some(self.output.no_color.to_string()),
            "output.list_format" => Some(self.output.list_format.as_str().to_owned()),
            _ => None,
        }
    }

    /// Every key understood by [`AppConfig::get`].
    pub const KEYS: [&'static str; 3] = [
        "projection.unknown_policy",
        "output.no_color",
        "output.list_format",
    ];

    /// Render as TOML, the on-disk format.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialise config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_reject_unknown_slugs() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.projection.unknown_policy, UnknownPolicy::Reject);
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.output.list_format, ListFormat::Table);
    }

    #[test]
    fn explicit_file_is_read() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("trellis.toml");
        fs::write(
            &path,
            "[projection]\nunknown_policy = \"fallback\"\n\n[output]\nlist_format = \"csv\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.projection.unknown_policy, UnknownPolicy::Fallback);
        assert_eq!(cfg.output.list_format, ListFormat::Csv);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = AppConfig::load(Some(&temp.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn bad_value_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("trellis.toml");
        fs::write(&path, "[projection]\nunknown_policy = \"maybe\"\n").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn toml_round_trips() {
        let cfg = AppConfig::default();
        let text = cfg.to_toml().unwrap();
        assert!(text.contains("unknown_policy = \"reject\""));
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        for key in AppConfig::KEYS {
            assert!(cfg.get(key).is_some(), "{key}");
        }
        assert_eq!(cfg.get("output.list_format").as_deref(), Some("table"));
        assert_eq!(cfg.get("does.not.exist"), None);
    }

    #[test]
    fn config_paths_are_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
        assert!(!AppConfig::global_config_path().as_os_str().is_empty());
    }
}
