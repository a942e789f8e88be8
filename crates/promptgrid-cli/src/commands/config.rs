//! `promptgrid config`: inspect configuration values.

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.data(&value)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised = config.to_toml().map_err(|e| CliError::ConfigError {
                message: format!("{e:#}"),
                source: None,
            })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            let path = global.config.unwrap_or_else(AppConfig::config_path);
            output.data(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "defaults.model" => Ok(config.defaults.model.to_string()),
        "defaults.scorer" => Ok(config.defaults.scorer.to_string()),
        "defaults.top" => Ok(config
            .defaults
            .top
            .map(|n| n.to_string())
            .unwrap_or_else(|| "all".into())),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.to_string()),
        _ => Err(CliError::ConfigError {
            message: format!(
                "Unknown config key: '{key}' (known: defaults.model, defaults.scorer, \
                 defaults.top, output.no_color, output.format)"
            ),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
