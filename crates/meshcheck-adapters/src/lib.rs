//! Infrastructure adapters for meshcheck.
//!
//! This crate implements the ports defined in `meshcheck_core::application::ports`.
//! It holds every I/O concern: snapshot files, catalog storage, rendering.

pub mod catalog;
pub mod catalog_loader;
pub mod renderer;

// Re-export commonly used adapters
pub use catalog::InMemoryCatalog;
pub use catalog_loader::{CatalogSnapshot, load_catalog};
pub use renderer::{JsonRenderer, TextRenderer};
