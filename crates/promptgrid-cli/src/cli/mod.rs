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
    name    = "promptgrid",
    bin_name = "promptgrid",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Score every prompt candidate against a dataset and pick the best",
    long_about = "Promptgrid renders each prompt template with every dataset input, \
                  runs it through a model, scores the output against the expected \
                  text, and ranks candidates by mean score.",
    after_help = "EXAMPLES:\n\
        \x20 promptgrid demo\n\
        \x20 promptgrid run --candidates prompts.toml --dataset qa.toml\n\
        \x20 promptgrid run --candidates prompts.json --dataset qa.json --scorer exact --format json\n\
        \x20 promptgrid validate --candidates prompts.toml",
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
    /// Evaluate candidates from a file against a dataset file.
    #[command(
        visible_alias = "r",
        about = "Rank prompt candidates against a dataset",
        after_help = "EXAMPLES:\n\
            \x20 promptgrid run --candidates prompts.toml --dataset qa.toml\n\
            \x20 promptgrid run --candidates prompts.toml --dataset qa.toml --top 3\n\
            \x20 promptgrid run --candidates prompts.toml --dataset qa.toml --model echo --format csv"
    )]
    Run(RunArgs),

    /// Run the built-in demo suite.
    #[command(about = "Run the built-in demo suite")]
    Demo(DemoArgs),

    /// Check candidate templates (and optionally a dataset) without running.
    #[command(
        about = "Validate candidate and dataset files",
        after_help = "EXAMPLES:\n\
            \x20 promptgrid validate --candidates prompts.toml\n\
            \x20 promptgrid validate --candidates prompts.toml --dataset qa.toml"
    )]
    Validate(ValidateArgs),

    /// Initialise a Promptgrid configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 promptgrid init          # default location\n\
            \x20 promptgrid init --force  # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 promptgrid completions bash > ~/.local/share/bash-completion/completions/promptgrid\n\
            \x20 promptgrid completions zsh  > ~/.zfunc/_promptgrid\n\
            \x20 promptgrid completions fish > ~/.config/fish/completions/promptgrid.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Promptgrid configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 promptgrid config get defaults.scorer\n\
            \x20 promptgrid config list\n\
            \x20 promptgrid config path"
    )]
    Config(ConfigCommands),
}

// ── run ───────────────────────────────────────────────────────────────────────

/// Arguments for `promptgrid run`.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Candidates file (`.toml` or `.json`).
    #[arg(long = "candidates", value_name = "FILE", help = "Candidates file (.toml or .json)")]
    pub candidates: PathBuf,

    /// Dataset file (`.toml` or `.json`).
    #[arg(
        short = 'd',
        long = "dataset",
        value_name = "FILE",
        help = "Dataset file (.toml or .json)"
    )]
    pub dataset: PathBuf,

    #[command(flatten)]
    pub report: ReportArgs,
}

/// Arguments for `promptgrid demo`.
#[derive(Debug, Args)]
pub struct DemoArgs {
    #[command(flatten)]
    pub report: ReportArgs,
}

/// Model, scorer, and report options shared by `run` and `demo`.
///
/// Every option falls back to the `[defaults]` / `[output]` config values.
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Generation backend.
    #[arg(short = 'm', long = "model", value_enum, help = "Generation model")]
    pub model: Option<ModelKind>,

    /// Scoring function.
    #[arg(short = 's', long = "scorer", value_enum, help = "Scoring function")]
    pub scorer: Option<ScorerKind>,

    /// Only show the best N candidates.
    #[arg(
        short = 'n',
        long = "top",
        value_name = "N",
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Show only the top N candidates"
    )]
    pub top: Option<u64>,

    /// Report format.
    #[arg(short = 'f', long = "format", value_enum, help = "Report format")]
    pub format: Option<ReportFormat>,
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `promptgrid validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Candidates file to check.
    #[arg(long = "candidates", value_name = "FILE", help = "Candidates file to check")]
    pub candidates: PathBuf,

    /// Dataset file to check (optional).
    #[arg(
        short = 'd',
        long = "dataset",
        value_name = "FILE",
        help = "Dataset file to check"
    )]
    pub dataset: Option<PathBuf>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `promptgrid init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `promptgrid completions`.
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

/// Subcommands for `promptgrid config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.model`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Generation backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// Keyword-rule model (no network).
    #[default]
    Simulated,
    /// Returns the rendered prompt.
    Echo,
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Simulated => write!(f, "simulated"),
            Self::Echo => write!(f, "echo"),
        }
    }
}

/// Scoring functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ScorerKind {
    /// Character similarity ratio in [0, 1].
    #[default]
    Similarity,
    /// 1.0 on exact (trimmed) match, else 0.0.
    Exact,
}

impl std::fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Similarity => write!(f, "similarity"),
            Self::Exact => write!(f, "exact"),
        }
    }
}

/// Report formats for `run` and `demo`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable leaderboard.
    #[default]
    Table,
    /// JSON document.
    Json,
    /// CSV rows.
    Csv,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
