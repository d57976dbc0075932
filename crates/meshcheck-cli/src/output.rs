//! Output management and formatting.

use std::{fs, io, path::Path};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, ReportFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    format: ReportFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
    err_term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// `config` must already carry the CLI overrides.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            format: config.output.format,
            quiet: args.quiet,
            no_color: config.output.no_color,
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    // ── Reports ────────────────────────────────────────────────────────────

    /// Emit a rendered report to `destination`, or to stdout.
    ///
    /// Reports are the command's result, so they are written in quiet mode
    /// too. On a colour terminal the ✓/✗ marks of text reports are coloured.
    pub fn report(&self, rendered: &str, destination: Option<&Path>) -> io::Result<()> {
        if let Some(path) = destination {
            fs::write(path, rendered)?;
            return self.success(&format!("Report written to {}", path.display()));
        }

        let colour = self.format == ReportFormat::Text && self.supports_color() && self.term.is_term();
        for line in rendered.lines() {
            if colour {
                self.term.write_line(&colour_marks(line))?;
            } else {
                self.term.write_line(line)?;
            }
        }
        Ok(())
    }

    // ── Messages ───────────────────────────────────────────────────────────

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator on stderr: `⚠ <msg>`.
    ///
    /// Kept off stdout so JSON reports stay parseable.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.err_term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The report format in effect.
    pub fn format(&self) -> ReportFormat {
        self.format
    }
}

/// Colour a leading ✓ green and a leading ✗ red, keeping indentation.
fn colour_marks(line: &str) -> String {
    let body = line.trim_start();
    let indent = &line[..line.len() - body.len()];

    if let Some(rest) = body.strip_prefix('\u{2713}') {
        format!("{indent}{}{rest}", "\u{2713}".green().bold())
    } else if let Some(rest) = body.strip_prefix('\u{2717}') {
        format!("{indent}{}{}", "\u{2717}".red().bold(), rest.red())
    } else {
        line.to_owned()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(quiet: bool, no_color: bool, format: ReportFormat) -> OutputManager {
        let args = GlobalArgs {
            quiet,
            ..GlobalArgs::default()
        };
        let mut config = AppConfig::default();
        config.output.no_color = no_color;
        config.output.format = format;
        OutputManager::new(&args, &config)
    }

    #[test]
    fn quiet_suppresses_messages() {
        let out = make_manager(true, true, ReportFormat::Text);
        assert!(out.is_quiet());
        assert!(out.success("hello").is_ok());
        assert!(out.warning("hello").is_ok());
    }

    #[test]
    fn no_color_flag_reported() {
        assert!(make_manager(false, false, ReportFormat::Text).supports_color());
        assert!(!make_manager(false, true, ReportFormat::Text).supports_color());
    }

    #[test]
    fn format_comes_from_config() {
        assert_eq!(
            make_manager(false, true, ReportFormat::Json).format(),
            ReportFormat::Json
        );
    }

    #[test]
    fn report_goes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let out = make_manager(true, true, ReportFormat::Text);

        out.report("Result: PASSED\n", Some(&path)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Result: PASSED\n");
    }

    #[test]
    fn colour_marks_keeps_text() {
        let coloured = colour_marks("  \u{2717} dataset_name: Orders");
        assert!(coloured.starts_with("  "));
        assert!(coloured.contains("dataset_name: Orders"));
        assert_eq!(colour_marks("Domain: Sales"), "Domain: Sales");
    }
}
