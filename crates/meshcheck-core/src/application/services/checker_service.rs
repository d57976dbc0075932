//! Checker Service - main application orchestrator.
//!
//! This service coordinates a metadata check:
//! 1. Fetch the entity (and its side data) through the `CatalogQuery` port
//! 2. Run the pure field validators from the domain layer
//! 3. Assemble the nested report
//!
//! A missing entity yields `Ok(None)`; only catalog failures are errors.

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::CatalogQuery,
    domain::{
        DataProduct, DatasetReport, DatasetView, DomainProductReport, EntityReport, Report,
        ReportError, ValidCatalogs, validators,
    },
    error::CheckerResult,
};

/// Main checking service.
pub struct CheckerService {
    catalog: Box<dyn CatalogQuery>,
    valid_catalogs: ValidCatalogs,
}

impl CheckerService {
    /// Create a checker that accepts the default catalog names.
    pub fn new(catalog: Box<dyn CatalogQuery>) -> Self {
        Self::with_valid_catalogs(catalog, ValidCatalogs::default())
    }

    /// Create a checker with an explicit catalog allow-list.
    pub fn with_valid_catalogs(catalog: Box<dyn CatalogQuery>, valid_catalogs: ValidCatalogs) -> Self {
        Self {
            catalog,
            valid_catalogs,
        }
    }

    pub fn valid_catalogs(&self) -> &ValidCatalogs {
        &self.valid_catalogs
    }

    /// Check a domain's own metadata.
    ///
    /// Returns `None` if the catalog has no domain with that name.
    #[instrument(skip(self))]
    pub fn check_domain(&self, domain_name: &str) -> CheckerResult<Option<EntityReport>> {
        let Some(domain) = self.catalog.get_domain_by_name(domain_name)? else {
            debug!("Domain not found");
            return Ok(None);
        };

        let report = validators::check_domain(&domain);
        info!(failed = report.failed_fields().count(), "Domain checked");
        Ok(Some(report))
    }

    /// Check a data product's descriptive metadata.
    ///
    /// Resolves the parent domain by id, then the product's tags through it.
    #[instrument(skip_all, fields(product = %product.name))]
    pub fn check_data_product_info(&self, product: &DataProduct) -> CheckerResult<EntityReport> {
        let domain = self.catalog.get_domain_by_id(&product.domain_id)?;
        let tags = self
            .catalog
            .get_data_product_tags(&domain.name, &product.name)?;
        debug!(domain = %domain.name, tags = tags.len(), "Side data resolved");

        Ok(validators::check_data_product_info(
            product,
            &tags,
            &self.valid_catalogs,
        ))
    }

    /// Check one dataset view.
    pub fn check_data_product_dataset(&self, dataset: &DatasetView) -> DatasetReport {
        validators::check_data_product_dataset(dataset)
    }

    /// Check every dataset of a product; `None` for materialized views.
    pub fn check_data_product_all_datasets(
        &self,
        product: &DataProduct,
    ) -> Option<Vec<DatasetReport>> {
        let reports = validators::check_data_product_all_datasets(product);
        if reports.is_none() {
            debug!(product = %product.name, "Materialized views, datasets skipped");
        }
        reports
    }

    /// Check a data product and its datasets.
    ///
    /// Returns `None` if the product does not exist in that domain.
    #[instrument(skip(self))]
    pub fn check_domain_data_product(
        &self,
        domain_name: &str,
        product_name: &str,
    ) -> CheckerResult<Option<DomainProductReport>> {
        let Some(product) = self.catalog.get_data_product(domain_name, product_name)? else {
            debug!("Data product not found");
            return Ok(None);
        };

        let report = DomainProductReport {
            domain_name: domain_name.to_string(),
            data_product_info: self.check_data_product_info(&product)?,
            data_product_datasets: self.check_data_product_all_datasets(&product),
        };
        info!("Data product checked");
        Ok(Some(report))
    }

    /// Check every data product assigned to a domain, in catalog order.
    ///
    /// Returns `None` if the domain does not exist. An entry is `None` when a
    /// listed product could not be fetched any more.
    #[instrument(skip(self))]
    pub fn check_domain_all_data_products(
        &self,
        domain_name: &str,
    ) -> CheckerResult<Option<Vec<Option<DomainProductReport>>>> {
        let Some(domain) = self.catalog.get_domain_by_name(domain_name)? else {
            debug!("Domain not found");
            return Ok(None);
        };

        let mut reports = Vec::with_capacity(domain.assigned_data_products.len());
        for product_name in &domain.assigned_data_products {
            let report = self.check_domain_data_product(domain_name, product_name)?;
            if report.is_none() {
                warn!(product = %product_name, "Listed data product vanished before it was fetched");
            }
            reports.push(report);
        }

        info!(products = reports.len(), "Domain data products checked");
        Ok(Some(reports))
    }

    /// Check a data product and always return something renderable.
    ///
    /// A missing product becomes a [`Report::Error`] notice instead of `None`.
    pub fn report_for(&self, domain_name: &str, product_name: &str) -> CheckerResult<Report> {
        Ok(
            match self.check_domain_data_product(domain_name, product_name)? {
                Some(report) => Report::Product(report),
                None => Report::Error(not_found_notice(domain_name, product_name)),
            },
        )
    }
}

/// Notice used when a data product cannot be found.
pub fn not_found_notice(domain_name: &str, product_name: &str) -> ReportError {
    ReportError {
        message: format!("Data product '{product_name}' not found in domain '{domain_name}'"),
        domain_name: domain_name.to_string(),
    }
}
