//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "groundwork",
    bin_name = "groundwork",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Idempotent scaffolding for an AI workflow knowledge base",
    long_about = "Groundwork lays out a fixed knowledge-base tree (global memory, \
                  prompts, secret metadata, projects, docs) under a root directory. \
                  Missing entries are created; existing files are never overwritten, \
                  so it is safe to run again at any time.",
    after_help = "EXAMPLES:\n\
        \x20 groundwork                      # scaffold the current directory\n\
        \x20 groundwork init --root ~/kb\n\
        \x20 groundwork init --dry-run\n\
        \x20 groundwork manifest --format json",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute. Defaults to `init` in the current directory.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the knowledge-base tree, leaving existing files untouched.
    #[command(
        about = "Scaffold the knowledge base (default command)",
        after_help = "EXAMPLES:\n\
            \x20 groundwork init\n\
            \x20 groundwork init --root ./ai-workflow\n\
            \x20 groundwork init --dry-run --output-format json"
    )]
    Init(InitArgs),

    /// Print the built-in manifest.
    #[command(
        visible_alias = "ls",
        about = "Show the directories and files Groundwork manages",
        after_help = "EXAMPLES:\n\
            \x20 groundwork manifest\n\
            \x20 groundwork manifest --format list\n\
            \x20 groundwork manifest --format csv"
    )]
    Manifest(ManifestArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 groundwork completions bash > ~/.local/share/bash-completion/completions/groundwork\n\
            \x20 groundwork completions zsh  > ~/.zfunc/_groundwork\n\
            \x20 groundwork completions fish > ~/.config/fish/completions/groundwork.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Groundwork configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 groundwork config get output.format\n\
            \x20 groundwork config list\n\
            \x20 groundwork config path"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `groundwork init`.
#[derive(Debug, Default, Args)]
pub struct InitArgs {
    /// Directory to scaffold into. Created if missing.
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        help = "Root directory (default: current directory)"
    )]
    pub root: Option<PathBuf>,

    /// Report what would be created without writing anything.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── manifest ──────────────────────────────────────────────────────────────────

/// Arguments for `groundwork manifest`.
#[derive(Debug, Args)]
pub struct ManifestArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ManifestFormat,
}

/// Output format for the `manifest` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ManifestFormat {
    /// Human-readable table.
    Table,
    /// One path per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `groundwork completions`.
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

/// Subcommands for `groundwork config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
