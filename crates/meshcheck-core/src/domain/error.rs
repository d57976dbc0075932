// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Failed field checks are never errors: they live inline in reports as
/// `is_valid: false`. This enum only covers states the domain cannot
/// represent as data.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Catalog allow-list is empty")]
    EmptyCatalogAllowList,

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("No domain with id '{id}'")]
    UnknownDomainId { id: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyCatalogAllowList => vec![
                "At least one accepted catalog name is required".into(),
                "Set validation.valid_catalogs in your config file".into(),
                "Example: valid_catalogs = [\"minio\", \"minio_robin\"]".into(),
            ],
            Self::UnknownDomainId { id } => vec![
                format!("A data product references domain id '{}'", id),
                "Check that the parent domain exists in the catalog".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyCatalogAllowList => ErrorCategory::Validation,
            Self::UnknownDomainId { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
