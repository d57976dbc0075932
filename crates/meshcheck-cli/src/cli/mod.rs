//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, ReportFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "meshcheck",
    bin_name = "meshcheck",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Data mesh catalog metadata checks",
    long_about = "meshcheck checks the metadata of data mesh domains, data products \
                  and their datasets against naming and documentation rules.",
    after_help = "EXAMPLES:\n\
        \x20 meshcheck --catalog catalog.toml domain Sales\n\
        \x20 meshcheck --catalog catalog.toml product Sales \"Sales Orders\"\n\
        \x20 meshcheck --catalog catalog.toml --format json products Sales\n\
        \x20 meshcheck completions bash > /usr/share/bash-completion/completions/meshcheck",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check a domain's own metadata.
    #[command(
        visible_alias = "d",
        about = "Check a domain",
        after_help = "EXAMPLES:\n\
            \x20 meshcheck domain Sales\n\
            \x20 meshcheck --format json domain Sales"
    )]
    Domain(DomainArgs),

    /// Check one data product and its datasets.
    #[command(
        visible_alias = "p",
        about = "Check a data product",
        after_help = "EXAMPLES:\n\
            \x20 meshcheck product Sales \"Sales Orders\"\n\
            \x20 meshcheck product Sales \"Sales Orders\" --output report.txt"
    )]
    Product(ProductArgs),

    /// Check every data product of a domain.
    #[command(
        about = "Check all data products of a domain",
        after_help = "EXAMPLES:\n\
            \x20 meshcheck products Sales\n\
            \x20 meshcheck --format json products Sales > sales.json"
    )]
    Products(DomainArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 meshcheck completions bash > ~/.local/share/bash-completion/completions/meshcheck\n\
            \x20 meshcheck completions zsh  > ~/.zfunc/_meshcheck\n\
            \x20 meshcheck completions fish > ~/.config/fish/completions/meshcheck.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the meshcheck configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 meshcheck config get validation.valid_catalogs\n\
            \x20 meshcheck config list\n\
            \x20 meshcheck config path"
    )]
    Config(ConfigCommands),
}

// ── domain / products ─────────────────────────────────────────────────────────

/// Arguments naming a domain.
#[derive(Debug, Args)]
pub struct DomainArgs {
    /// Domain name as registered in the catalog.
    #[arg(value_name = "DOMAIN", help = "Domain name")]
    pub domain: String,
}

// ── product ───────────────────────────────────────────────────────────────────

/// Arguments for `meshcheck product`.
#[derive(Debug, Args)]
pub struct ProductArgs {
    /// Domain the data product belongs to.
    #[arg(value_name = "DOMAIN", help = "Domain name")]
    pub domain: String,

    /// Data product name.
    #[arg(value_name = "PRODUCT", help = "Data product name")]
    pub product: String,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `meshcheck completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `meshcheck config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
