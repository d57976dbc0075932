//! Application services - orchestrate use cases.

pub mod checker_service;

pub use checker_service::{CheckerService, not_found_notice};
