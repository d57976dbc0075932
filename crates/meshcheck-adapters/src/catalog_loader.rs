//! Catalog snapshot loader.
//!
//! Reads a catalog dump from disk and fills an [`InMemoryCatalog`] with it.
//! The format is picked from the file extension (`.json` or `.toml`).
//!
//! # Snapshot format
//!
//! ```toml
//! [[domains]]
//! id                     = "d-1"
//! name                   = "Sales"
//! description            = "Sales domain"
//! schema_location        = "s3://starburst/sales_data"
//! assigned_data_products = ["Sales Orders"]     # optional, catalog order
//!
//! [[data_products]]
//! domain_id          = "d-1"
//! name               = "Sales Orders"
//! summary            = "Orders"
//! catalog_name       = "minio"
//! materialized_views = false
//! owners             = [{ name = "Ada", email = "ada@example.com" }]
//! tags               = ["finance"]
//!
//! [[data_products.views]]
//! name        = "orders"
//! description = "All orders"
//! columns     = [{ name = "id", type = "bigint", description = "Order id" }]
//! ```
//!
//! Every data product must reference a domain declared in the same file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use meshcheck_core::{
    application::{ApplicationError, ports::CatalogQuery},
    domain::{DataProduct, Domain, Tag},
    error::{CheckerError, CheckerResult},
};

use crate::catalog::InMemoryCatalog;

// ── Snapshot types ───────────────────────────────────────────────────────────

/// Deserialised representation of a snapshot file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub domains: Vec<Domain>,
    #[serde(default)]
    pub data_products: Vec<ProductEntry>,
}

/// A data product together with its catalog tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntry {
    #[serde(flatten)]
    pub product: DataProduct,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Snapshot file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Toml,
}

impl SnapshotFormat {
    /// Pick the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

// ── Loading ──────────────────────────────────────────────────────────────────

/// Parse snapshot text in the given format.
pub fn parse_snapshot(content: &str, format: SnapshotFormat) -> Result<CatalogSnapshot, String> {
    match format {
        SnapshotFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        SnapshotFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
    }
}

/// Read and parse a snapshot file.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn read_snapshot(path: &Path) -> CheckerResult<CatalogSnapshot> {
    let format = SnapshotFormat::from_path(path)
        .ok_or_else(|| load_error(path, "unsupported extension, expected .json or .toml"))?;

    let content = fs::read_to_string(path).map_err(|e| load_error(path, e))?;
    let snapshot = parse_snapshot(&content, format).map_err(|e| load_error(path, e))?;

    debug!(
        domains = snapshot.domains.len(),
        data_products = snapshot.data_products.len(),
        "Snapshot parsed"
    );
    Ok(snapshot)
}

/// Build a catalog from a parsed snapshot.
pub fn into_catalog(snapshot: CatalogSnapshot) -> CheckerResult<InMemoryCatalog> {
    let catalog = InMemoryCatalog::new();

    for domain in snapshot.domains {
        catalog.insert_domain(domain)?;
    }
    for ProductEntry { product, tags } in snapshot.data_products {
        catalog.insert_data_product(product, tags)?;
    }

    for domain in catalog.domains()? {
        for name in &domain.assigned_data_products {
            // A listed but absent product is reported per product, not here.
            if !snapshot_has(&catalog, &domain, name)? {
                warn!(domain = %domain.name, product = %name, "Assigned data product missing from snapshot");
            }
        }
    }

    Ok(catalog)
}

/// Read a snapshot file straight into a catalog.
pub fn load_catalog(path: &Path) -> CheckerResult<InMemoryCatalog> {
    let catalog = into_catalog(read_snapshot(path)?).map_err(|e| match e {
        CheckerError::Domain(err) => load_error(path, err),
        other => other,
    })?;

    info!(
        path = %path.display(),
        data_products = catalog.product_count()?,
        "Catalog snapshot loaded"
    );
    Ok(catalog)
}

fn snapshot_has(catalog: &InMemoryCatalog, domain: &Domain, product: &str) -> CheckerResult<bool> {
    Ok(catalog.get_data_product(&domain.name, product)?.is_some())
}

fn load_error(path: &Path, reason: impl ToString) -> CheckerError {
    ApplicationError::CatalogLoad {
        path: PathBuf::from(path),
        reason: reason.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TOML_SNAPSHOT: &str = r#"
[[domains]]
id = "d-1"
name = "Sales"
description = "Sales domain"
schema_location = "s3://starburst/sales_data"
assigned_data_products = ["Sales Orders", "Returns"]

[[data_products]]
domain_id = "d-1"
name = "Sales Orders"
summary = "Orders"
catalog_name = "minio"
owners = [{ name = "Ada", email = "ada@example.com" }]
tags = ["finance"]

[[data_products.views]]
name = "orders"
description = "All orders"
columns = [{ name = "id", type = "bigint", description = "Order id" }]
"#;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            SnapshotFormat::from_path(Path::new("a.JSON")),
            Some(SnapshotFormat::Json)
        );
        assert_eq!(
            SnapshotFormat::from_path(Path::new("a.toml")),
            Some(SnapshotFormat::Toml)
        );
        assert_eq!(SnapshotFormat::from_path(Path::new("a.yaml")), None);
        assert_eq!(SnapshotFormat::from_path(Path::new("catalog")), None);
    }

    #[test]
    fn parses_toml_snapshot() {
        let snapshot = parse_snapshot(TOML_SNAPSHOT, SnapshotFormat::Toml).unwrap();
        assert_eq!(snapshot.domains.len(), 1);

        let entry = &snapshot.data_products[0];
        assert_eq!(entry.tags, vec![Tag::new("finance")]);
        assert_eq!(entry.product.owners[0].email.as_deref(), Some("ada@example.com"));
        assert_eq!(entry.product.views[0].columns[0].data_type, "bigint");
        assert!(!entry.product.materialized_views);
    }

    #[test]
    fn parses_json_snapshot() {
        let json = r#"{
            "domains": [{ "id": "d-1", "name": "Sales" }],
            "data_products": [{
                "domain_id": "d-1",
                "name": "Sales Orders",
                "materialized_views": true
            }]
        }"#;
        let snapshot = parse_snapshot(json, SnapshotFormat::Json).unwrap();
        assert!(snapshot.data_products[0].product.materialized_views);
        assert!(snapshot.data_products[0].tags.is_empty());
    }

    #[test]
    fn loads_file_into_catalog() {
        let file = write_temp(".toml", TOML_SNAPSHOT);
        let catalog = load_catalog(file.path()).unwrap();

        let domain = catalog.get_domain_by_name("Sales").unwrap().unwrap();
        assert_eq!(domain.assigned_data_products, vec!["Sales Orders", "Returns"]);
        assert!(
            catalog
                .get_data_product("Sales", "Returns")
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn unsupported_extension_is_a_load_error() {
        let file = write_temp(".yaml", "domains: []");
        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(
            err,
            CheckerError::Application(ApplicationError::CatalogLoad { .. })
        ));
    }

    #[test]
    fn malformed_file_is_a_load_error() {
        let file = write_temp(".json", "{ not json");
        assert!(load_catalog(file.path()).is_err());
    }

    #[test]
    fn orphan_product_is_a_load_error() {
        let file = write_temp(
            ".toml",
            "[[data_products]]\ndomain_id = \"d-9\"\nname = \"Lost\"\n",
        );
        let err = load_catalog(file.path()).unwrap_err();
        assert!(err.to_string().contains("d-9"));
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_catalog(&dir.path().join("absent.toml")).is_err());
    }
}
