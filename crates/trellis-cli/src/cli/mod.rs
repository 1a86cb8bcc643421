//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "trellis",
    bin_name = "trellis",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Service catalogue and slug lookup for generated projects",
    long_about = "Trellis maps every service a generated project can be built from \
                  to its external slug, and checks selection files against that table.",
    after_help = "EXAMPLES:\n\
        \x20 trellis list --filter spring\n\
        \x20 trellis project SPRINGBOOT_JWT MONGODB\n\
        \x20 trellis resolve spring-boot react-styled\n\
        \x20 trellis check ./selections\n\
        \x20 trellis completions bash > /usr/share/bash-completion/completions/trellis",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every service and its slug.
    #[command(
        visible_alias = "ls",
        about = "List services and their slugs",
        after_help = "EXAMPLES:\n\
            \x20 trellis list\n\
            \x20 trellis list --filter mongo\n\
            \x20 trellis list --renamed --format json"
    )]
    List(ListArgs),

    /// Internal name to slug.
    #[command(
        about = "Print the slug for each service name",
        after_help = "EXAMPLES:\n\
            \x20 trellis project SPRINGBOOT\n\
            \x20 trellis project REACT REACT_STYLED"
    )]
    Project(ProjectArgs),

    /// Slug to internal name.
    #[command(
        about = "Print the service name for each slug",
        after_help = "EXAMPLES:\n\
            \x20 trellis resolve spring-boot-jwt\n\
            \x20 trellis resolve kafka --fallback"
    )]
    Resolve(ResolveArgs),

    /// Validate selection files.
    #[command(
        about = "Validate selection files or directories",
        after_help = "EXAMPLES:\n\
            \x20 trellis check shop.toml\n\
            \x20 trellis check ./selections ui.json"
    )]
    Check(CheckArgs),

    /// Initialise a Trellis configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 trellis init           # default location\n\
            \x20 trellis init --local   # .trellis.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 trellis completions bash > ~/.local/share/bash-completion/completions/trellis\n\
            \x20 trellis completions zsh  > ~/.zfunc/_trellis\n\
            \x20 trellis completions fish > ~/.config/fish/completions/trellis.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Trellis configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 trellis config get projection.unknown_policy\n\
            \x20 trellis config list\n\
            \x20 trellis config path"
    )]
    Config(ConfigCommands),
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `trellis list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive substring of the name or slug.
    #[arg(short = 'f', long = "filter", value_name = "QUERY")]
    pub filter: Option<String>,

    /// Only show slugs that differ from the mechanical form of the name.
    #[arg(long = "renamed", help = "Only show renamed slugs")]
    pub renamed: bool,

    /// Output format. Defaults to `output.list_format` from the config.
    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<ListFormat>,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListFormat {
    /// Human-readable table.
    #[default]
    Table,
    /// One slug per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

impl ListFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::List => "list",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

// ── project / resolve ─────────────────────────────────────────────────────────

/// Arguments for `trellis project`.
#[derive(Debug, Args)]
pub struct ProjectArgs {
    /// Internal service names, e.g. `SPRINGBOOT_JWT`.
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,
}

/// Arguments for `trellis resolve`.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// External slugs, e.g. `spring-boot-jwt`.
    #[arg(value_name = "SLUG", required = true)]
    pub slugs: Vec<String>,

    /// Map unrecognised slugs to `unknown` instead of failing.
    #[arg(long = "fallback")]
    pub fallback: bool,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `trellis check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Selection files, or directories to search for `.toml` / `.json` files.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Map unrecognised slugs to `unknown` instead of failing.
    #[arg(long = "fallback")]
    pub fallback: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `trellis init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.trellis.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `trellis completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `trellis config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `projection.unknown_policy`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path of the config file read without `--config`.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
