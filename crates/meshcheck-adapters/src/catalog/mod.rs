//! Catalog adapters implementing [`CatalogQuery`](meshcheck_core::application::ports::CatalogQuery).

pub mod memory;

pub use memory::InMemoryCatalog;
