//! # Trellis CLI
//!
//! Look up services and their slugs, and validate selection files.
//!
//! ## Startup sequence
//!
//! 1. Load `.env` (if present).
//! 2. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 3. Initialise the tracing subscriber (logging).
//! 4. Load configuration (defaults + file + env).
//! 5. Build the [`OutputManager`].
//! 6. Dispatch to the appropriate command handler.
//! 7. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  3   | Resource not found      |
//! |  4   | Configuration error     |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Missing .env is normal; real deployments use the environment.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version land here too and must exit 0.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    // Held until exit so the file writer flushes.
    let _log_guard = match init_logging(&cli.global) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialise logging: {e:#}");
            return ExitCode::from(1);
        }
    };

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;
    let plain_errors = cli.global.no_color || !std::io::stderr().is_terminal();

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            let err = CliError::ConfigError {
                message: format!("{e:#}"),
                source: None,
            };
            return handle_error(err, verbose, plain_errors);
        }
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);
    let plain_errors = plain_errors || !output.supports_color();

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli.command, &config, &output) {
        Ok(()) => {
            info!("Trellis completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, plain_errors),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(command: Commands, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    match command {
        Commands::List(args) => commands::list::execute(args, config, output),
        Commands::Project(args) => commands::project::execute(&args.names, output),
        Commands::Resolve(args) => commands::resolve::execute(&args, config, output),
        Commands::Check(args) => commands::check::execute(&args, config, output),
        Commands::Init(args) => commands::init::execute(&args, output),
        Commands::Completions(args) => commands::completions::execute(&args),
        Commands::Config(cmd) => commands::config::execute(&cmd, config, output),
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
///
/// Errors are rendered here and nowhere else.
fn handle_error(err: CliError, verbose: bool, plain: bool) -> ExitCode {
    err.log();

    // stderr, so the message survives redirected stdout.
    let msg = if plain {
        err.format_plain(verbose)
    } else {
        err.format_colored(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn cli_has_author() {
        let cmd = Cli::command();
        assert!(cmd.get_author().is_some());
    }
}
