//! Catalog entities: domains and data products.
//!
//! Read-only value types produced by a [`CatalogQuery`] adapter. They carry
//! no behaviour beyond field access and display.
//!
//! [`CatalogQuery`]: crate::application::ports::CatalogQuery

use serde::{Deserialize, Serialize};

use super::common::{DomainId, Owner};
use super::dataset::DatasetView;

/// Top-level grouping of data products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub id: DomainId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub schema_location: String,
    /// Product names in the order the catalog lists them.
    #[serde(default)]
    pub assigned_data_products: Vec<String>,
}

impl Domain {
    pub fn new(id: impl Into<DomainId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            schema_location: String::new(),
            assigned_data_products: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_schema_location(mut self, location: impl Into<String>) -> Self {
        self.schema_location = location.into();
        self
    }

    pub fn with_data_product(mut self, product_name: impl Into<String>) -> Self {
        self.assigned_data_products.push(product_name.into());
        self
    }
}

/// A named, owned collection of datasets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataProduct {
    pub name: String,
    pub domain_id: DomainId,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub catalog_name: String,
    #[serde(default)]
    pub owners: Vec<Owner>,
    /// When set, `views` cannot be introspected and no dataset is checked.
    #[serde(default)]
    pub materialized_views: bool,
    #[serde(default)]
    pub views: Vec<DatasetView>,
}

impl DataProduct {
    pub fn new(name: impl Into<String>, domain_id: impl Into<DomainId>) -> Self {
        Self {
            name: name.into(),
            domain_id: domain_id.into(),
            summary: String::new(),
            catalog_name: String::new(),
            owners: Vec::new(),
            materialized_views: false,
            views: Vec::new(),
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_catalog(mut self, catalog_name: impl Into<String>) -> Self {
        self.catalog_name = catalog_name.into();
        self
    }

    pub fn with_owner(mut self, owner: Owner) -> Self {
        self.owners.push(owner);
        self
    }

    pub fn with_view(mut self, view: DatasetView) -> Self {
        self.views.push(view);
        self
    }

    pub fn materialized(mut self, materialized_views: bool) -> Self {
        self.materialized_views = materialized_views;
        self
    }
}
