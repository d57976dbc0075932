//! Core domain layer for meshcheck.
//!
//! Pure business logic: catalog entities, naming rules, field validators,
//! report types and the report aggregator.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: Validators take already-fetched values; fetching goes through
//!   the `CatalogQuery` port in the application layer
//! - **Immutable values**: Entities and reports are `Clone + PartialEq` and
//!   never mutated after construction
//! - **Failures are data**: a failed rule is `is_valid: false`, not an `Err`

// Public API - what the world sees
pub mod aggregate;
pub mod entities;
pub mod error;
pub mod naming;
pub mod report;
pub mod validators;
pub mod value_objects;

// Re-exports for convenience
pub use aggregate::{ReportSummary, summarize, summarize_domain, validate_report};
pub use entities::{Column, DataProduct, DatasetView, Domain, DomainId, Owner, Tag};
pub use error::{DomainError, ErrorCategory};
pub use naming::{
    is_snake_case, is_upper_camel_case, is_upper_camel_word, is_valid_domain_product_name,
    to_snake_case,
};
pub use report::{
    DatasetReport, DomainProductReport, EntityReport, FieldCheck, FieldValue, Report,
    ReportError, fields,
};
pub use validators::{
    check_data_product_all_datasets, check_data_product_dataset, check_data_product_info,
    check_domain,
};
pub use value_objects::{DEFAULT_VALID_CATALOGS, ValidCatalogs};
