//! `meshcheck product`: check one data product and its datasets.

use meshcheck_core::domain::{Report, summarize, validate_report};
use tracing::instrument;

use crate::{
    cli::{GlobalArgs, ProductArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(domain = %args.domain, product = %args.product))]
pub fn execute(
    args: ProductArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = super::build_service(&config)?;

    // A missing product still renders, as an error notice.
    let report = service.report_for(&args.domain, &args.product)?;
    let rendered = super::renderer(output.format()).render(&report)?;
    output
        .report(&rendered, global.output.as_deref())
        .with_cli_context(|| "writing data product report")?;

    if let Report::Error(_) = report {
        return Err(CliError::ProductNotFound {
            domain: args.domain,
            product: args.product,
        });
    }

    if validate_report(&report) {
        return Ok(());
    }

    let summary = summarize(&report);
    Err(CliError::CheckFailed {
        subject: format!("data product '{}'", args.product),
        failures: summary.failures,
        notices: summary.notices,
    })
}
