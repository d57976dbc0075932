//! Machine-readable JSON renderer.

use meshcheck_core::{
    application::{ApplicationError, ports::ReportRenderer},
    domain::{EntityReport, Report, ReportSummary, summarize, summarize_domain, validate_report},
    error::CheckerResult,
};
use serde::Serialize;

/// Document written for a data product report.
#[derive(Serialize)]
struct ProductDocument<'a> {
    valid: bool,
    summary: ReportSummary,
    report: &'a Report,
}

/// Document written for a domain report.
#[derive(Serialize)]
struct DomainDocument<'a> {
    domain_name: &'a str,
    valid: bool,
    summary: ReportSummary,
    report: &'a EntityReport,
}

/// Renders reports as pretty-printed JSON with the verdict alongside.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &Report) -> CheckerResult<String> {
        to_json(&ProductDocument {
            valid: validate_report(report),
            summary: summarize(report),
            report,
        })
    }

    fn render_domain(&self, domain_name: &str, report: &EntityReport) -> CheckerResult<String> {
        let summary = summarize_domain(report);
        to_json(&DomainDocument {
            domain_name,
            valid: summary.is_valid(),
            summary,
            report,
        })
    }
}

fn to_json<T: Serialize>(document: &T) -> CheckerResult<String> {
    serde_json::to_string_pretty(document).map_err(|e| {
        ApplicationError::RenderingFailed {
            reason: e.to_string(),
        }
        .into()
    })
}
