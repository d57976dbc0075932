//! Application layer for meshcheck.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (CheckerService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer fetches and assembles; every rule lives in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{CheckerService, not_found_notice};

pub use ports::{CatalogQuery, ReportRenderer};

pub use error::ApplicationError;
