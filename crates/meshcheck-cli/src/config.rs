//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only receives the values it needs.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags ([`AppConfig::apply_cli`])
//! 2. Environment variables `MESHCHECK__<SECTION>__<KEY>`
//! 3. Config file (`--config`, or the platform default path if it exists)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use meshcheck_core::domain::{DEFAULT_VALID_CATALOGS, ValidCatalogs};

use crate::{
    cli::global::{GlobalArgs, ReportFormat},
    error::{CliError, CliResult},
};

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "MESHCHECK";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the catalog comes from.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Rule settings.
    #[serde(default)]
    pub validation: ValidationConfig,
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub snapshot_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default = "default_valid_catalogs")]
    pub valid_catalogs: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            valid_catalogs: default_valid_catalogs(),
        }
    }
}

fn default_valid_catalogs() -> Vec<String> {
    DEFAULT_VALID_CATALOGS.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub no_color: bool,
    #[serde(default)]
    pub format: ReportFormat,
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist. Without it the default location is used if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file
            .cloned()
            .unwrap_or_else(Self::config_path);
        Self::load_from(&path, config_file.is_some())
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        // Built-in defaults come from the serde `default` attributes.
        let settings = Config::builder()
            .add_source(File::from(path).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("validation.valid_catalogs")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn apply_cli(&mut self, args: &GlobalArgs) {
        if let Some(path) = &args.catalog {
            self.catalog.snapshot_path = Some(path.clone());
        }
        if let Some(format) = args.format {
            self.output.format = format;
        }
        if args.no_color {
            self.output.no_color = true;
        }
    }

    /// The catalog allow-list as a domain value.
    pub fn valid_catalogs(&self) -> CliResult<ValidCatalogs> {
        ValidCatalogs::new(self.validation.valid_catalogs.iter().cloned()).map_err(|e| {
            CliError::ConfigError {
                message: e.to_string(),
                source: Some(Box::new(e)),
            }
        })
    }

    /// The snapshot to check, or an error telling the user how to pass one.
    pub fn snapshot_path(&self) -> CliResult<&Path> {
        self.catalog
            .snapshot_path
            .as_deref()
            .ok_or(CliError::MissingCatalog)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.meshcheck.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "meshcheck")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".meshcheck.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_accept_minio_catalogs() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.validation.valid_catalogs, vec!["minio", "minio_robin"]);
        assert_eq!(cfg.output.format, ReportFormat::Text);
        assert!(!cfg.output.no_color);
        assert!(cfg.catalog.snapshot_path.is_none());
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load_from(&dir.path().join("absent.toml"), false).unwrap();
        assert_eq!(cfg.validation.valid_catalogs.len(), 2);
    }

    #[test]
    fn missing_required_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load_from(&dir.path().join("absent.toml"), true).is_err());
    }

    #[test]
    fn file_values_override_defaults() {
        let file = write_config(
            "[catalog]\nsnapshot_path = \"snap.json\"\n\n\
             [validation]\nvalid_catalogs = [\"lakehouse\"]\n\n\
             [output]\nformat = \"json\"\n",
        );
        let cfg = AppConfig::load_from(file.path(), true).unwrap();

        assert_eq!(cfg.catalog.snapshot_path, Some(PathBuf::from("snap.json")));
        assert_eq!(cfg.validation.valid_catalogs, vec!["lakehouse"]);
        assert_eq!(cfg.output.format, ReportFormat::Json);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn unknown_format_is_rejected() {
        let file = write_config("[output]\nformat = \"pdf\"\n");
        assert!(AppConfig::load_from(file.path(), true).is_err());
    }

    #[test]
    fn cli_flags_win() {
        let mut cfg = AppConfig::default();
        let args = GlobalArgs {
            catalog: Some(PathBuf::from("cli.toml")),
            format: Some(ReportFormat::Json),
            no_color: true,
            ..GlobalArgs::default()
        };
        cfg.apply_cli(&args);

        assert_eq!(cfg.snapshot_path().unwrap(), Path::new("cli.toml"));
        assert_eq!(cfg.output.format, ReportFormat::Json);
        assert!(cfg.output.no_color);
    }

    #[test]
    fn missing_snapshot_is_user_error() {
        assert!(matches!(
            AppConfig::default().snapshot_path(),
            Err(CliError::MissingCatalog)
        ));
    }

    #[test]
    fn empty_allow_list_is_config_error() {
        let mut cfg = AppConfig::default();
        cfg.validation.valid_catalogs.clear();
        assert!(matches!(
            cfg.valid_catalogs(),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
