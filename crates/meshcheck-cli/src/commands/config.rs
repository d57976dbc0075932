//! `meshcheck config`: inspect configuration values.

use std::path::PathBuf;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `config_file` is the `--config` path, if one was given.
pub fn execute(
    cmd: ConfigCommands,
    config_file: Option<PathBuf>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.report(&format!("{key} = {value}"), None)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.report(&serialised, None)?;
        }

        ConfigCommands::Path => {
            let path = config_file.unwrap_or_else(AppConfig::config_path);
            output.report(&path.display().to_string(), None)?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "catalog.snapshot_path" => Ok(config
            .catalog
            .snapshot_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()),
        "validation.valid_catalogs" => Ok(config.validation.valid_catalogs.join(",")),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.to_string()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
