//! `trellis config`: inspect configuration values.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: &ConfigCommands, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(config, key)?;
            output.data(&value)?;
        }
        ConfigCommands::List if output.is_json() => output.json(config)?,
        ConfigCommands::List => {
            let serialised = config.to_toml().map_err(|e| CliError::ConfigError {
                message: format!("{e:#}"),
                source: None,
            })?;
            output.header("Current Configuration:")?;
            output.data(serialised.trim_end())?;
        }
        ConfigCommands::Path => {
            output.data(&AppConfig::config_path().display().to_string())?;
        }
    }
    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    config.get(key).ok_or_else(|| CliError::ConfigError {
        message: format!(
            "Unknown config key: '{key}' (known keys: {})",
            AppConfig::KEYS.join(", ")
        ),
        source: None,
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
