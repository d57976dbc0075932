pub mod catalog;
pub mod common;
pub mod dataset;

pub use catalog::{DataProduct, Domain};
pub use common::{DomainId, Owner, Tag};
pub use dataset::{Column, DatasetView};
