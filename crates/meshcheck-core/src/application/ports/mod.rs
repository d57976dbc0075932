//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `meshcheck-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `CatalogQuery`: Read-only catalog lookups
//!   - `ReportRenderer`: Report rendering
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

#[cfg(test)]
pub use output::MockCatalogQuery;
pub use output::{CatalogQuery, ReportRenderer};
