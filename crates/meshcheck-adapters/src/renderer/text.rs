//! Human-readable plain text renderer.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use meshcheck_core::{
    application::ports::ReportRenderer,
    domain::{
        Column, DomainProductReport, EntityReport, FieldCheck, Report, ReportSummary, fields,
        summarize, summarize_domain, validate_report,
    },
    error::{CheckerResult, Context},
};
use tracing::instrument;

const PASS: &str = "\u{2713}"; // ✓
const FAIL: &str = "\u{2717}"; // ✗

/// Renders reports as indented plain text with ✓/✗ marks.
pub struct TextRenderer {
    timestamp: bool,
}

impl TextRenderer {
    /// Create a renderer that stamps every document with the current time.
    pub fn new() -> Self {
        Self { timestamp: true }
    }

    /// Create a renderer whose output is stable between runs.
    pub fn without_timestamp() -> Self {
        Self { timestamp: false }
    }

    fn header(&self, out: &mut String, title: &str) -> std::fmt::Result {
        writeln!(out, "{title}")?;
        writeln!(out, "{}", "=".repeat(title.chars().count()))?;
        if self.timestamp {
            let now: DateTime<Utc> = Utc::now();
            writeln!(out, "Generated: {}", now.format("%Y-%m-%d %H:%M:%S UTC"))?;
        }
        writeln!(out)
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for TextRenderer {
    #[instrument(skip_all, fields(domain = report.domain_name()))]
    fn render(&self, report: &Report) -> CheckerResult<String> {
        let mut out = String::new();
        write_report(self, &mut out, report).context("rendering text report")?;
        Ok(out)
    }

    fn render_domain(&self, domain_name: &str, report: &EntityReport) -> CheckerResult<String> {
        let mut out = String::new();
        write_domain(self, &mut out, domain_name, report).context("rendering domain report")?;
        Ok(out)
    }
}

fn write_report(renderer: &TextRenderer, out: &mut String, report: &Report) -> std::fmt::Result {
    match report {
        Report::Error(err) => {
            renderer.header(out, &format!("Data product report: {}", err.domain_name))?;
            writeln!(out, "{FAIL} {}", err.message)?;
        }
        Report::Product(product) => {
            let title = product
                .data_product_info
                .get(fields::DATA_PRODUCT_NAME)
                .map_or_else(|| "Data product report".to_string(), |name| {
                    format!("Data product report: {}", name.value)
                });
            renderer.header(out, &title)?;
            write_product(out, product)?;
        }
    }

    writeln!(out)?;
    write_verdict(out, &summarize(report), validate_report(report))
}

fn write_product(out: &mut String, product: &DomainProductReport) -> std::fmt::Result {
    writeln!(out, "Domain: {}", product.domain_name)?;
    writeln!(out)?;

    writeln!(out, "Data product information")?;
    write_checks(out, &product.data_product_info, 2)?;
    writeln!(out)?;

    writeln!(out, "Datasets")?;
    match product.data_product_datasets.as_deref() {
        None => writeln!(out, "  Materialized views: datasets cannot be checked")?,
        Some([]) => writeln!(out, "  No dataset exposed")?,
        Some(datasets) => {
            for (idx, dataset) in datasets.iter().enumerate() {
                let name = dataset
                    .get(fields::DATASET_NAME)
                    .map(|check| check.value.to_string())
                    .unwrap_or_default();
                writeln!(out, "  Dataset {}: {name}", idx + 1)?;
                write_checks(out, dataset, 4)?;
            }
        }
    }
    Ok(())
}

fn write_domain(
    renderer: &TextRenderer,
    out: &mut String,
    domain_name: &str,
    report: &EntityReport,
) -> std::fmt::Result {
    renderer.header(out, &format!("Domain report: {domain_name}"))?;
    write_checks(out, report, 2)?;
    writeln!(out)?;

    let summary = summarize_domain(report);
    let valid = summary.is_valid();
    write_verdict(out, &summary, valid)
}

fn write_checks(out: &mut String, report: &EntityReport, indent: usize) -> std::fmt::Result {
    let pad = " ".repeat(indent);
    for (field, check) in report.iter() {
        let mark = if check.is_valid { PASS } else { FAIL };
        if field == fields::DATASET_COLUMNS {
            writeln!(out, "{pad}{mark} {field}:")?;
            write_columns(out, check, indent + 4)?;
        } else {
            writeln!(out, "{pad}{mark} {field}: {}", check.value)?;
        }
    }
    Ok(())
}

/// Columns come back from the report as rendered `(name;type;description)`
/// strings; lay them out as a table.
fn write_columns(out: &mut String, check: &FieldCheck, indent: usize) -> std::fmt::Result {
    let pad = " ".repeat(indent);
    let items = check.value.as_list().unwrap_or_default();
    if items.is_empty() {
        return writeln!(out, "{pad}(no columns)");
    }

    let rows: Vec<(&str, &str, &str)> = items
        .iter()
        .map(|item| Column::parse_rendered(item).unwrap_or((item.as_str(), "", "")))
        .collect();

    let name_width = rows.iter().map(|r| r.0.chars().count()).max().unwrap_or(0).max(4);
    let type_width = rows.iter().map(|r| r.1.chars().count()).max().unwrap_or(0).max(4);

    writeln!(out, "{pad}{:<name_width$}  {:<type_width$}  description", "name", "type")?;
    for (name, data_type, description) in rows {
        let description = if description.is_empty() {
            format!("{FAIL} missing")
        } else {
            description.to_string()
        };
        writeln!(
            out,
            "{pad}{name:<name_width$}  {data_type:<type_width$}  {description}"
        )?;
    }
    Ok(())
}

fn write_verdict(out: &mut String, summary: &ReportSummary, valid: bool) -> std::fmt::Result {
    for notice in &summary.notices {
        writeln!(out, "Note: {notice}")?;
    }
    let verdict = if valid { "PASSED" } else { "FAILED" };
    writeln!(
        out,
        "Result: {verdict} ({} checks, {} failed)",
        summary.checked,
        summary.failed()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshcheck_core::domain::{FieldValue, ReportError};

    fn product_report(materialized: bool) -> Report {
        let info = EntityReport::new()
            .with(fields::DATA_PRODUCT_NAME, FieldCheck::new("Sales Orders", true))
            .with(fields::DATA_PRODUCT_SUMMARY, FieldCheck::new("", false));
        let dataset = EntityReport::new()
            .with(fields::DATASET_NAME, FieldCheck::new("orders", true))
            .with(
                fields::DATASET_COLUMNS,
                FieldCheck::new(
                    FieldValue::List(vec![
                        "(id;bigint;Order id)".into(),
                        "(total;double;)".into(),
                    ]),
                    false,
                ),
            );

        Report::Product(DomainProductReport {
            domain_name: "Sales".into(),
            data_product_info: info,
            data_product_datasets: (!materialized).then(|| vec![dataset]),
        })
    }

    #[test]
    fn renders_marks_and_column_table() {
        let text = TextRenderer::without_timestamp()
            .render(&product_report(false))
            .unwrap();

        assert!(text.starts_with("Data product report: Sales Orders\n"));
        assert!(text.contains("\u{2713} data_product_name: Sales Orders"));
        assert!(text.contains("\u{2717} data_product_summary: "));
        assert!(text.contains("Dataset 1: orders"));
        assert!(text.contains("id     bigint  Order id"));
        assert!(text.contains("total  double  \u{2717} missing"));
        assert!(text.contains("Result: FAILED (4 checks, 2 failed)"));
        assert!(!text.contains("Generated:"));
    }

    #[test]
    fn column_table_aligns_non_ascii_names() {
        let dataset = EntityReport::new().with(
            fields::DATASET_COLUMNS,
            FieldCheck::new(
                FieldValue::List(vec!["(größe;double;Size)".into(), "(id;bigint;Id)".into()]),
                true,
            ),
        );
        let report = Report::Product(DomainProductReport {
            domain_name: "Sales".into(),
            data_product_info: EntityReport::new(),
            data_product_datasets: Some(vec![dataset]),
        });

        let text = TextRenderer::without_timestamp().render(&report).unwrap();
        assert!(text.contains("name   type    description"));
        assert!(text.contains("größe  double  Size"));
        assert!(text.contains("id     bigint  Id"));
    }

    #[test]
    fn materialized_views_are_noted() {
        let text = TextRenderer::without_timestamp()
            .render(&product_report(true))
            .unwrap();
        assert!(text.contains("Materialized views: datasets cannot be checked"));
        assert!(text.contains("Result: FAILED"));
    }

    #[test]
    fn error_report_shows_message() {
        let report = Report::Error(ReportError {
            message: "Data product 'Ghost' not found in domain 'Sales'".into(),
            domain_name: "Sales".into(),
        });
        let text = TextRenderer::without_timestamp().render(&report).unwrap();
        assert!(text.starts_with("Data product report: Sales\n"));
        assert!(text.contains("\u{2717} Data product 'Ghost' not found"));
        assert!(text.contains("Result: FAILED (0 checks, 0 failed)"));
    }

    #[test]
    fn domain_report_passes_when_all_valid() {
        let report = EntityReport::new()
            .with(fields::DOMAIN_NAME, FieldCheck::new("Sales", true))
            .with(fields::DOMAIN_DESCRIPTION, FieldCheck::new("Sales", true));
        let text = TextRenderer::without_timestamp()
            .render_domain("Sales", &report)
            .unwrap();
        assert!(text.starts_with("Domain report: Sales\n====="));
        assert!(text.contains("Result: PASSED (2 checks, 0 failed)"));
    }

    #[test]
    fn timestamp_header_is_optional() {
        let text = TextRenderer::new()
            .render_domain("Sales", &EntityReport::new())
            .unwrap();
        assert!(text.contains("Generated: "));
    }
}
