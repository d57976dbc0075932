//! Validation report types.
//!
//! A report is a small tree:
//!
//! ```text
//! Report
//! ├── Product(DomainProductReport)
//! │   ├── data_product_info:     EntityReport  (field → FieldCheck)
//! │   └── data_product_datasets: Option<Vec<DatasetReport>>
//! └── Error(ReportError)                       (message + domain_name)
//! ```
//!
//! Every leaf is a [`FieldCheck`]. Reports are built once per check and are
//! never mutated afterwards; the JSON form produced by `serde` mirrors this
//! tree exactly.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Report keys, shared by validators, renderers and tests.
pub mod fields {
    pub const DOMAIN_NAME: &str = "domain_name";
    pub const DOMAIN_DESCRIPTION: &str = "domain_description";
    pub const DOMAIN_SCHEMA_LOCATION: &str = "domain_schema_location";

    pub const DATA_PRODUCT_NAME: &str = "data_product_name";
    pub const DATA_PRODUCT_SUMMARY: &str = "data_product_summary";
    pub const DATA_PRODUCT_CATALOG_NAME: &str = "data_product_catalog_name";
    pub const DATA_PRODUCT_OWNERS: &str = "data_product_owners";
    pub const DATA_PRODUCT_TAGS: &str = "data_product_tags";

    pub const DATASET_NAME: &str = "dataset_name";
    pub const DATASET_DESCRIPTION: &str = "dataset_description";
    pub const DATASET_COLUMNS: &str = "dataset_columns";
}

// ── FieldValue ───────────────────────────────────────────────────────────────

/// The raw value of a checked field, as it should be displayed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Render every item with its `Display` impl.
    pub fn list_of<T: fmt::Display>(items: &[T]) -> Self {
        Self::List(items.iter().map(ToString::to_string).collect())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Text(_) => None,
            Self::List(items) => Some(items),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

// ── FieldCheck ───────────────────────────────────────────────────────────────

/// Outcome of checking a single field.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FieldCheck {
    pub value: FieldValue,
    pub is_valid: bool,
}

impl FieldCheck {
    pub fn new(value: impl Into<FieldValue>, is_valid: bool) -> Self {
        Self {
            value: value.into(),
            is_valid,
        }
    }
}

// ── EntityReport ─────────────────────────────────────────────────────────────

/// Field checks for one entity, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityReport {
    checks: Vec<(&'static str, FieldCheck)>,
}

/// Field checks for one dataset (`dataset_name`, `dataset_description`,
/// `dataset_columns`).
pub type DatasetReport = EntityReport;

impl EntityReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion. A repeated field replaces the earlier check.
    pub fn with(mut self, field: &'static str, check: FieldCheck) -> Self {
        match self.checks.iter_mut().find(|(name, _)| *name == field) {
            Some((_, existing)) => *existing = check,
            None => self.checks.push((field, check)),
        }
        self
    }

    pub fn get(&self, field: &str) -> Option<&FieldCheck> {
        self.checks
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, check)| check)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldCheck)> {
        self.checks.iter().map(|(name, check)| (*name, check))
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// `true` if no field failed. Stops at the first failure.
    pub fn all_valid(&self) -> bool {
        self.checks.iter().all(|(_, check)| check.is_valid)
    }

    /// Names of failing fields, in order.
    pub fn failed_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.checks
            .iter()
            .filter(|(_, check)| !check.is_valid)
            .map(|(name, _)| *name)
    }
}

impl Serialize for EntityReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.checks.len()))?;
        for (name, check) in &self.checks {
            map.serialize_entry(name, check)?;
        }
        map.end()
    }
}

// ── Product report ───────────────────────────────────────────────────────────

/// Full check of one data product within its domain.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DomainProductReport {
    pub domain_name: String,
    pub data_product_info: EntityReport,
    /// `None` when the product is backed by materialized views.
    pub data_product_datasets: Option<Vec<DatasetReport>>,
}

/// Notice returned in place of a product report, e.g. when the product
/// does not exist.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ReportError {
    pub message: String,
    pub domain_name: String,
}

/// What the checker hands to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum Report {
    Product(DomainProductReport),
    Error(ReportError),
}

impl Report {
    pub fn domain_name(&self) -> &str {
        match self {
            Self::Product(report) => &report.domain_name,
            Self::Error(err) => &err.domain_name,
        }
    }
}

impl From<DomainProductReport> for Report {
    fn from(report: DomainProductReport) -> Self {
        Self::Product(report)
    }
}

impl From<ReportError> for Report {
    fn from(err: ReportError) -> Self {
        Self::Error(err)
    }
}
