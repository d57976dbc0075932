//! Domain value objects.
//!
//! # Design
//!
//! Pure value types with equality-by-value and no identity. Constructed once
//! from configuration and passed by reference into the validators.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog names accepted for a data product when nothing is configured.
pub const DEFAULT_VALID_CATALOGS: [&str; 2] = ["minio", "minio_robin"];

// ── ValidCatalogs ────────────────────────────────────────────────────────────

/// Allow-list of catalog names a data product may live in.
///
/// Never empty: an empty list would fail every data product, which is
/// always a configuration mistake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ValidCatalogs(Vec<String>);

impl ValidCatalogs {
    pub fn new<I, S>(names: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(DomainError::EmptyCatalogAllowList);
        }
        Ok(Self(names))
    }

    /// Exact, case-sensitive membership.
    pub fn contains(&self, catalog_name: &str) -> bool {
        self.0.iter().any(|name| name == catalog_name)
    }
}

impl Default for ValidCatalogs {
    fn default() -> Self {
        Self(DEFAULT_VALID_CATALOGS.iter().map(|s| s.to_string()).collect())
    }
}

impl TryFrom<Vec<String>> for ValidCatalogs {
    type Error = DomainError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(names)
    }
}

impl From<ValidCatalogs> for Vec<String> {
    fn from(catalogs: ValidCatalogs) -> Self {
        catalogs.0
    }
}

impl fmt::Display for ValidCatalogs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}
