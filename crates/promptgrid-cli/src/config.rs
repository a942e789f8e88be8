//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `PROMPTGRID__DEFAULTS__MODEL=echo`
//! 3. Config file (`--config FILE`, else the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::cli::{ModelKind, ReportFormat, ScorerKind};

/// Prefix for environment overrides; nested keys are joined with `__`.
pub const ENV_PREFIX: &str = "PROMPTGRID";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Defaults for `run` and `demo`.
    #[serde(default)]
    pub defaults: Defaults,
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default)]
    pub model: ModelKind,
    #[serde(default)]
    pub scorer: ScorerKind,
    /// Leaderboard length; `None` shows every candidate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub no_color: bool,
    #[serde(default)]
    pub format: ReportFormat,
}

impl AppConfig {
    /// Load configuration from defaults, file, and environment.
    ///
    /// `config_file` is the path the user passed via `--config`.  An explicit
    /// file must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };

        Self::load_from(&path, required, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        if required && !path.exists() {
            anyhow::bail!("config file not found: {}", path.display());
        }

        let settings = Config::builder()
            .set_default("defaults.model", ModelKind::default().to_string())?
            .set_default("defaults.scorer", ScorerKind::default().to_string())?
            .set_default("output.no_color", false)?
            .set_default("output.format", ReportFormat::default().to_string())?
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                env.prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("invalid configuration in {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.promptgrid.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "promptgrid", "promptgrid")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".promptgrid.toml"))
    }

    /// Render as the TOML written by `promptgrid init`.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("failed to serialise configuration")
    }
}
