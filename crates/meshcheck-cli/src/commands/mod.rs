//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod domain;
pub mod product;
pub mod products;

use meshcheck_adapters::{InMemoryCatalog, JsonRenderer, TextRenderer, load_catalog};
use meshcheck_core::{application::ports::ReportRenderer, prelude::CheckerService};
use tracing::debug;

use crate::{cli::ReportFormat, config::AppConfig, error::CliResult};

/// Load the configured catalog snapshot.
pub(crate) fn load_snapshot(config: &AppConfig) -> CliResult<InMemoryCatalog> {
    let path = config.snapshot_path()?;
    debug!(path = %path.display(), "Loading catalog snapshot");
    Ok(load_catalog(path)?)
}

/// Wire a checker around a loaded catalog.
pub(crate) fn checker(catalog: InMemoryCatalog, config: &AppConfig) -> CliResult<CheckerService> {
    let valid_catalogs = config.valid_catalogs()?;
    debug!(%valid_catalogs, "Building checker");
    Ok(CheckerService::with_valid_catalogs(
        Box::new(catalog),
        valid_catalogs,
    ))
}

/// Load the configured snapshot and wire a checker around it.
pub(crate) fn build_service(config: &AppConfig) -> CliResult<CheckerService> {
    checker(load_snapshot(config)?, config)
}

/// Renderer for the requested format.
pub(crate) fn renderer(format: ReportFormat) -> Box<dyn ReportRenderer> {
    match format {
        ReportFormat::Text => Box::new(TextRenderer::new()),
        ReportFormat::Json => Box::new(JsonRenderer::new()),
    }
}
