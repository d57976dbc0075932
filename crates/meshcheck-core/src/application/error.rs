//! Application layer errors.
//!
//! These errors represent failures in orchestration (talking to the catalog,
//! rendering), not failed checks. Failed checks are data inside a report.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while orchestrating a check.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The catalog could not answer a query.
    #[error("Catalog unavailable: {reason}")]
    CatalogUnavailable { reason: String },

    /// A catalog snapshot could not be read or parsed.
    #[error("Failed to load catalog snapshot {path}: {reason}")]
    CatalogLoad { path: PathBuf, reason: String },

    /// Report rendering failed.
    #[error("Report rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Catalog store access failed (lock poisoned).
    #[error("Catalog store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::CatalogUnavailable { reason } => vec![
                format!("The catalog did not respond: {}", reason),
                "Try again in a moment".into(),
            ],
            Self::CatalogLoad { path, .. } => vec![
                format!("Could not use snapshot: {}", path.display()),
                "Check that the file exists and is valid JSON or TOML".into(),
                "The file extension (.json / .toml) selects the format".into(),
            ],
            Self::StoreLockError => vec![
                "The catalog store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::RenderingFailed { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CatalogUnavailable { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::CatalogLoad { .. } => ErrorCategory::Configuration,
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
        }
    }
}
