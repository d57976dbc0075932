//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `meshcheck-adapters` crate provides implementations.

use crate::domain::{DataProduct, Domain, DomainId, EntityReport, Report, Tag};
use crate::error::CheckerResult;

/// Port for read-only catalog queries.
///
/// Implemented by:
/// - `meshcheck_adapters::catalog::InMemoryCatalog` (snapshots, tests)
///
/// ## Design Notes
///
/// - "Does not exist" is `Ok(None)`, never an error; the checker turns it
///   into a missing report
/// - `Err` is reserved for the catalog failing to answer
/// - Synchronous: any blocking happens inside the adapter
#[cfg_attr(test, mockall::automock)]
pub trait CatalogQuery: Send + Sync {
    /// Look up a domain by its display name.
    fn get_domain_by_name(&self, name: &str) -> CheckerResult<Option<Domain>>;

    /// Resolve a data product's parent domain.
    ///
    /// The id comes from the catalog itself, so an unknown id is an error.
    fn get_domain_by_id(&self, id: &DomainId) -> CheckerResult<Domain>;

    /// Look up a data product inside a domain.
    fn get_data_product(
        &self,
        domain_name: &str,
        product_name: &str,
    ) -> CheckerResult<Option<DataProduct>>;

    /// Tags attached to a data product.
    fn get_data_product_tags(&self, domain_name: &str, product_name: &str)
    -> CheckerResult<Vec<Tag>>;
}

/// Port for turning reports into documents.
///
/// Implemented by:
/// - `meshcheck_adapters::renderer::TextRenderer` (human-readable)
/// - `meshcheck_adapters::renderer::JsonRenderer` (machine-readable)
///
/// Renderers must accept both report shapes (`Report::Product` and
/// `Report::Error`) and only ever borrow what they are given.
pub trait ReportRenderer: Send + Sync {
    /// Render a data product report (or its error notice).
    fn render(&self, report: &Report) -> CheckerResult<String>;

    /// Render a standalone domain report.
    fn render_domain(&self, domain_name: &str, report: &EntityReport) -> CheckerResult<String>;
}
