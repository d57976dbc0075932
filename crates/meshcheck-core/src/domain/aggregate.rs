//! Reduction of a report to an overall verdict.

use crate::domain::report::{EntityReport, Report};

/// Decide whether a report passes as a whole.
///
/// A report fails if it is an error notice, if it has no dataset reports
/// (missing because of materialized views, or empty), or if any field check
/// anywhere in it is invalid.
pub fn validate_report(report: &Report) -> bool {
    let Report::Product(product) = report else {
        return false;
    };

    let datasets = match product.data_product_datasets.as_deref() {
        Some(datasets) if !datasets.is_empty() => datasets,
        _ => return false,
    };

    product.data_product_info.all_valid() && datasets.iter().all(EntityReport::all_valid)
}

/// Counts and locations of failures in a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ReportSummary {
    /// Number of field checks inspected.
    pub checked: usize,
    /// Paths of failing checks, e.g. `data_product_datasets[1].dataset_columns`.
    pub failures: Vec<String>,
    /// Report-level problems that are not tied to a field.
    pub notices: Vec<String>,
}

impl ReportSummary {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty() && self.notices.is_empty()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Walk the whole report and collect every failure.
///
/// Agrees with [`validate_report`] on the verdict; unlike it, it does not
/// stop at the first failure.
pub fn summarize(report: &Report) -> ReportSummary {
    let mut summary = ReportSummary::default();

    let product = match report {
        Report::Error(err) => {
            let notice = if err.message.is_empty() {
                "no data product report was produced".to_string()
            } else {
                err.message.clone()
            };
            summary.notices.push(notice);
            return summary;
        }
        Report::Product(product) => product,
    };

    collect(&mut summary, "data_product_info", &product.data_product_info);

    match product.data_product_datasets.as_deref() {
        None => summary
            .notices
            .push("datasets are materialized views and cannot be checked".into()),
        Some([]) => summary.notices.push("data product exposes no dataset".into()),
        Some(datasets) => {
            for (idx, dataset) in datasets.iter().enumerate() {
                collect(
                    &mut summary,
                    &format!("data_product_datasets[{idx}]"),
                    dataset,
                );
            }
        }
    }

    summary
}

/// Summary for a standalone domain report.
pub fn summarize_domain(report: &EntityReport) -> ReportSummary {
    let mut summary = ReportSummary::default();
    collect(&mut summary, "domain", report);
    summary
}

fn collect(summary: &mut ReportSummary, prefix: &str, report: &EntityReport) {
    summary.checked += report.len();
    summary
        .failures
        .extend(report.failed_fields().map(|field| format!("{prefix}.{field}")));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::{
        DatasetReport, DomainProductReport, FieldCheck, FieldValue, ReportError, fields,
    };

    fn info(valid: bool) -> EntityReport {
        EntityReport::new()
            .with(fields::DATA_PRODUCT_NAME, FieldCheck::new("Sales Orders", true))
            .with(fields::DATA_PRODUCT_SUMMARY, FieldCheck::new("x", valid))
    }

    fn dataset(columns_valid: bool) -> DatasetReport {
        EntityReport::new()
            .with(fields::DATASET_NAME, FieldCheck::new("orders", true))
            .with(
                fields::DATASET_COLUMNS,
                FieldCheck::new(
                    FieldValue::List(vec!["(id;bigint;)".into()]),
                    columns_valid,
                ),
            )
    }

    fn product(info: EntityReport, datasets: Option<Vec<DatasetReport>>) -> Report {
        Report::Product(DomainProductReport {
            domain_name: "Sales".into(),
            data_product_info: info,
            data_product_datasets: datasets,
        })
    }

    #[test]
    fn message_report_is_invalid() {
        let report = Report::Error(ReportError {
            message: "Data product not found".into(),
            domain_name: "Sales".into(),
        });
        assert!(!validate_report(&report));
        assert!(!summarize(&report).is_valid());
    }

    #[test]
    fn empty_dataset_list_is_invalid() {
        let report = product(info(true), Some(vec![]));
        assert!(!validate_report(&report));
        assert_eq!(summarize(&report).notices.len(), 1);
    }

    #[test]
    fn missing_dataset_list_is_invalid() {
        assert!(!validate_report(&product(info(true), None)));
    }

    #[test]
    fn all_valid_report_passes() {
        let report = product(info(true), Some(vec![dataset(true), dataset(true)]));
        assert!(validate_report(&report));

        let summary = summarize(&report);
        assert!(summary.is_valid());
        assert_eq!(summary.checked, 6);
    }

    #[test]
    fn single_invalid_column_check_fails_report() {
        let report = product(info(true), Some(vec![dataset(true), dataset(false)]));
        assert!(!validate_report(&report));
        assert_eq!(
            summarize(&report).failures,
            vec!["data_product_datasets[1].dataset_columns".to_string()]
        );
    }

    #[test]
    fn invalid_info_field_fails_report() {
        let report = product(info(false), Some(vec![dataset(true)]));
        assert!(!validate_report(&report));
        assert_eq!(
            summarize(&report).failures,
            vec!["data_product_info.data_product_summary".to_string()]
        );
    }

    #[test]
    fn domain_summary_prefixes_fields() {
        let report = EntityReport::new()
            .with(fields::DOMAIN_NAME, FieldCheck::new("sales", false))
            .with(fields::DOMAIN_DESCRIPTION, FieldCheck::new("x", true));
        let summary = summarize_domain(&report);
        assert_eq!(summary.checked, 2);
        assert_eq!(summary.failures, vec!["domain.domain_name".to_string()]);
    }
}
