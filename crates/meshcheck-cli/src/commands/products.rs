//! `meshcheck products`: check every data product of a domain.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use meshcheck_core::{
    application::{not_found_notice, ports::CatalogQuery},
    domain::{Report, fields, summarize, validate_report},
    error::CheckerError,
};
use tracing::{info, instrument};

use crate::{
    cli::{DomainArgs, GlobalArgs, ReportFormat},
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
    let catalog = super::load_snapshot(&config)?;
    let service = super::checker(catalog.clone(), &config)?;

    let spinner = if output.is_quiet() {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    spinner.set_message(format!("Checking data products of {}", args.domain));
    spinner.enable_steady_tick(Duration::from_millis(100));
    let checked = service.check_domain_all_data_products(&args.domain);
    spinner.finish_and_clear();

    let products = checked?.ok_or_else(|| CliError::DomainNotFound {
        domain: args.domain.clone(),
    })?;

    if products.is_empty() {
        output.warning(&format!("Domain '{}' has no data products", args.domain))?;
    }

    // Reports come back in the domain's listing order, so the listed names
    // label them, including products that vanished before they were fetched.
    let names = catalog
        .get_domain_by_name(&args.domain)?
        .map(|domain| domain.assigned_data_products)
        .unwrap_or_default();
    info!(products = products.len(), "Rendering reports");

    let (names, reports): (Vec<String>, Vec<Report>) = products
        .into_iter()
        .zip(names)
        .map(|(report, name)| {
            let report = match report {
                Some(report) => Report::Product(report),
                None => Report::Error(not_found_notice(&args.domain, &name)),
            };
            (name, report)
        })
        .unzip();

    let renderer = super::renderer(output.format());
    let bar = if output.is_quiet() {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(reports.len() as u64)
    };
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} reports rendered")
            .map_err(|e| CheckerError::Internal {
                message: format!("invalid progress template: {e}"),
            })?
            .progress_chars("=>-"),
    );

    let mut rendered = Vec::with_capacity(reports.len());
    for report in &reports {
        rendered.push(renderer.render(report)?);
        bar.inc(1);
    }
    bar.finish_and_clear();

    output
        .report(&join(output.format(), &rendered), global.output.as_deref())
        .with_cli_context(|| "writing data product reports")?;

    let mut failures = Vec::new();
    let mut notices = Vec::new();
    for (name, report) in names.iter().zip(&reports) {
        if validate_report(report) {
            continue;
        }
        let summary = summarize(report);
        let label = product_label(name, report);
        failures.extend(summary.failures.iter().map(|f| format!("{label}: {f}")));
        notices.extend(summary.notices.iter().map(|n| format!("{label}: {n}")));
    }

    if failures.is_empty() && notices.is_empty() {
        Ok(())
    } else {
        Err(CliError::CheckFailed {
            subject: format!("domain '{}' data products", args.domain),
            failures,
            notices,
        })
    }
}

/// Name of the product a report is about, for failure listings.
///
/// Falls back to the listed name when the report carries none.
fn product_label(listed: &str, report: &Report) -> String {
    match report {
        Report::Product(product) => product
            .data_product_info
            .get(fields::DATA_PRODUCT_NAME)
            .map(|check| check.value.to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| listed.to_string()),
        Report::Error(_) => listed.to_string(),
    }
}

/// Combine several rendered reports into one document.
///
/// JSON documents become a JSON array; text documents are separated by a rule.
fn join(format: ReportFormat, rendered: &[String]) -> String {
    match format {
        ReportFormat::Json if rendered.is_empty() => "[]\n".to_string(),
        ReportFormat::Json => format!("[\n{}\n]\n", rendered.join(",\n")),
        ReportFormat::Text => rendered.join(&format!("\n{}\n\n", "-".repeat(60))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_documents_form_an_array() {
        let joined = join(ReportFormat::Json, &["{\"a\": 1}".into(), "{\"b\": 2}".into()]);
        let value: serde_json::Value = serde_json::from_str(&joined).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn no_documents_is_an_empty_json_array() {
        let joined = join(ReportFormat::Json, &[]);
        let value: serde_json::Value = serde_json::from_str(&joined).unwrap();
        assert_eq!(value, serde_json::json!([]));
        assert_eq!(join(ReportFormat::Text, &[]), "");
    }

    #[test]
    fn missing_product_is_labelled_by_its_listed_name() {
        let report = Report::Error(not_found_notice("Sales", "Ghost"));
        assert_eq!(product_label("Ghost", &report), "Ghost");
    }

    #[test]
    fn text_documents_are_separated() {
        let joined = join(ReportFormat::Text, &["one\n".into(), "two\n".into()]);
        assert!(joined.starts_with("one\n"));
        assert!(joined.contains(&"-".repeat(60)));
        assert!(joined.ends_with("two\n"));
    }
}
