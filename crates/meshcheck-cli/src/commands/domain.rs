//! `meshcheck domain`: check a domain's own metadata.

use meshcheck_core::domain::summarize_domain;
use tracing::instrument;

use crate::{
    cli::{DomainArgs, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(domain = %args.domain))]
pub fn execute(
    args: DomainArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = super::build_service(&config)?;

    let report = service
        .check_domain(&args.domain)?
        .ok_or_else(|| CliError::DomainNotFound {
            domain: args.domain.clone(),
        })?;

    let rendered = super::renderer(output.format()).render_domain(&args.domain, &report)?;
    output
        .report(&rendered, global.output.as_deref())
        .with_cli_context(|| "writing domain report")?;

    let summary = summarize_domain(&report);
    if summary.is_valid() {
        Ok(())
    } else {
        Err(CliError::CheckFailed {
            subject: format!("domain '{}'", args.domain),
            failures: summary.failures,
            notices: summary.notices,
        })
    }
}
