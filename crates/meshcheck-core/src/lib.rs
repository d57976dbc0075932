//! meshcheck core - data mesh catalog metadata checks.
//!
//! Domain and application layers of the meshcheck tool, following hexagonal
//! (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          meshcheck-cli (CLI)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (CheckerService)             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │     (CatalogQuery, ReportRenderer)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    meshcheck-adapters (Infrastructure)  │
//! │ (InMemoryCatalog, TextRenderer, JSON)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (naming rules, validators, reports)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use meshcheck_core::prelude::*;
//!
//! fn run(catalog: Box<dyn CatalogQuery>) -> CheckerResult<bool> {
//!     let service = CheckerService::new(catalog);
//!     let report = service.report_for("Sales", "Sales Orders")?;
//!     Ok(validate_report(&report))
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CheckerService,
        ports::{CatalogQuery, ReportRenderer},
    };
    pub use crate::domain::{
        DataProduct, DatasetView, Domain, EntityReport, Report, ReportSummary, ValidCatalogs,
        summarize, validate_report,
    };
    pub use crate::error::{CheckerError, CheckerResult};
}
