//! Error handling for the meshcheck CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping
//!
//! A report whose checks fail is surfaced as [`CliError::CheckFailed`] so
//! that it gets its own exit code.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use meshcheck_core::error::CheckerError;

// Re-export so callers only need `use crate::error::*`.
pub use meshcheck_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// No catalog snapshot was given.
    #[error("No catalog snapshot given")]
    MissingCatalog,

    /// The requested domain is not in the catalog.
    #[error("Domain '{domain}' not found")]
    DomainNotFound { domain: String },

    /// The requested data product is not in the domain.
    #[error("Data product '{product}' not found in domain '{domain}'")]
    ProductNotFound { domain: String, product: String },

    /// A report was produced and at least one check failed.
    #[error("Check failed for {subject}")]
    CheckFailed {
        subject: String,
        failures: Vec<String>,
        notices: Vec<String>,
    },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration value is unusable.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `meshcheck-core` or the adapters.
    #[error("Check could not run: {0}")]
    Core(#[from] CheckerError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingCatalog => vec![
                "Pass a snapshot with --catalog FILE".into(),
                "Or set catalog.snapshot_path in your config file".into(),
                "Or export MESHCHECK__CATALOG__SNAPSHOT_PATH".into(),
            ],

            Self::DomainNotFound { domain } => vec![
                format!("No domain is named '{}'", domain),
                "Domain names are case-sensitive".into(),
            ],

            Self::ProductNotFound { domain, .. } => vec![
                format!("Check every product of the domain: meshcheck products {:?}", domain),
                "Data product names are case-sensitive".into(),
            ],

            Self::CheckFailed {
                failures, notices, ..
            } => {
                let mut suggestions: Vec<String> = failures
                    .iter()
                    .map(|field| format!("\u{2717} {field}"))
                    .collect();
                suggestions.extend(notices.iter().cloned());
                suggestions
            }

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Run 'meshcheck config path' to find your config file".into(),
                "Run 'meshcheck config list' to see effective values".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingCatalog => ErrorCategory::UserError,
            Self::DomainNotFound { .. } | Self::ProductNotFound { .. } => ErrorCategory::NotFound,
            Self::CheckFailed { .. } => ErrorCategory::CheckFailed,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | Internal      |  1   |
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Check failed  |  5   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Internal => 1,
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::CheckFailed => 5,
        }
    }

    fn heading(&self) -> &'static str {
        match self.category() {
            ErrorCategory::CheckFailed => "Failed checks:",
            _ => "Suggestions:",
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "\u{2717}".red().bold(),
            "Error:".red().bold()
        ));

        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "\u{2192}".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", self.heading().yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(),
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!("\n{}\n", self.heading()));
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::CheckFailed => tracing::info!("{}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (missing argument, invalid value).
    UserError,
    /// Domain or data product not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// A report was produced and it did not pass.
    CheckFailed,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}
