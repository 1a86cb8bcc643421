//! `trellis init`: create a default configuration file.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    cli::InitArgs,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Write the built-in defaults to the chosen config location.
pub fn execute(args: &InitArgs, output: &OutputManager) -> CliResult<()> {
    let config_path = if args.local {
        PathBuf::from(LOCAL_CONFIG_FILE)
    } else {
        AppConfig::global_config_path()
    };

    // Bail early if the file already exists and --force was not given.
    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    write_default(&config_path)?;
    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}

fn write_default(path: &Path) -> CliResult<()> {
    let toml = AppConfig::default()
        .to_toml()
        .map_err(|e| CliError::ConfigError {
            message: format!("{e:#}"),
            source: None,
        })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))?;
    debug!(path = %path.display(), "Wrote default config");
    Ok(())
}
