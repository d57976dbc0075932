//! In-memory catalog backed by plain collections.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use meshcheck_core::{
    application::{ApplicationError, ports::CatalogQuery},
    domain::{DataProduct, Domain, DomainError, DomainId, Tag},
    error::CheckerResult,
};
use tracing::trace;

#[derive(Debug, Default)]
struct Inner {
    /// Domains in insertion order.
    domains: Vec<Domain>,
    /// Products keyed by (domain id, product name), with their tags.
    products: HashMap<(DomainId, String), (DataProduct, Vec<Tag>)>,
}

impl Inner {
    fn domain_by_name(&self, name: &str) -> Option<&Domain> {
        self.domains.iter().find(|d| d.name == name)
    }

    fn product(&self, domain_name: &str, product_name: &str) -> Option<&(DataProduct, Vec<Tag>)> {
        let domain = self.domain_by_name(domain_name)?;
        self.products
            .get(&(domain.id.clone(), product_name.to_string()))
    }
}

/// Thread-safe in-memory catalog.
///
/// Cloning shares the underlying data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a domain, replacing any domain with the same id.
    pub fn insert_domain(&self, domain: Domain) -> CheckerResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        match inner.domains.iter_mut().find(|d| d.id == domain.id) {
            Some(existing) => *existing = domain,
            None => inner.domains.push(domain),
        }
        Ok(())
    }

    /// Add a data product and its tags.
    ///
    /// The parent domain must already be present. The product is appended to
    /// the domain's assigned list unless the domain already names it.
    pub fn insert_data_product(&self, product: DataProduct, tags: Vec<Tag>) -> CheckerResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let domain = inner
            .domains
            .iter_mut()
            .find(|d| d.id == product.domain_id)
            .ok_or_else(|| DomainError::UnknownDomainId {
                id: product.domain_id.to_string(),
            })?;

        if !domain.assigned_data_products.contains(&product.name) {
            domain.assigned_data_products.push(product.name.clone());
        }

        let key = (product.domain_id.clone(), product.name.clone());
        inner.products.insert(key, (product, tags));
        Ok(())
    }

    /// Domains in insertion order.
    pub fn domains(&self) -> CheckerResult<Vec<Domain>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.domains.clone())
    }

    /// Number of data products held.
    pub fn product_count(&self) -> CheckerResult<usize> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.products.len())
    }
}

impl CatalogQuery for InMemoryCatalog {
    fn get_domain_by_name(&self, name: &str) -> CheckerResult<Option<Domain>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        trace!(name, "Domain lookup");
        Ok(inner.domain_by_name(name).cloned())
    }

    fn get_domain_by_id(&self, id: &DomainId) -> CheckerResult<Domain> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner
            .domains
            .iter()
            .find(|d| &d.id == id)
            .cloned()
            .ok_or_else(|| DomainError::UnknownDomainId { id: id.to_string() }.into())
    }

    fn get_data_product(
        &self,
        domain_name: &str,
        product_name: &str,
    ) -> CheckerResult<Option<DataProduct>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        trace!(domain_name, product_name, "Data product lookup");
        Ok(inner
            .product(domain_name, product_name)
            .map(|(product, _)| product.clone()))
    }

    fn get_data_product_tags(
        &self,
        domain_name: &str,
        product_name: &str,
    ) -> CheckerResult<Vec<Tag>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner
            .product(domain_name, product_name)
            .map(|(_, tags)| tags.clone())
            .unwrap_or_default())
    }
}
