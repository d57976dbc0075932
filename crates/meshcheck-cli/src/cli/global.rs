//! Global arguments that apply to every subcommand.
//!
//! Declared here and flattened into [`super::Cli`] so that `-v`, `-q`, etc.
//! are available on any invocation without repetition

use clap::Args;
use serde::{Deserialize, Serialize};
use std::{fmt, path::PathBuf};

/// Global arguments for all commands.
#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`).  Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Only warnings and errors
    -v      - Info level (progress messages)
    -vv     - Debug level (detailed diagnostics)
    -vvv    - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>). Any value other than an empty string,
    /// `0`, `false`, `no` or `off` disables colour.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Configuration file path.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// Catalog snapshot to check (overrides `catalog.snapshot_path`).
    #[arg(
        long = "catalog",
        global = true,
        value_name = "FILE",
        help = "Catalog snapshot file (.json or .toml)"
    )]
    pub catalog: Option<PathBuf>,

    /// Report format (overrides `output.format`).
    #[arg(
        long = "format",
        global = true,
        value_enum,
        help = "Report format"
    )]
    pub format: Option<ReportFormat>,

    /// Write the rendered report to a file instead of stdout.
    #[arg(
        short = 'o',
        long = "output",
        global = true,
        value_name = "FILE",
        help = "Write the report to FILE"
    )]
    pub output: Option<PathBuf>,
}

/// How reports are rendered.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable text with check marks.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}
