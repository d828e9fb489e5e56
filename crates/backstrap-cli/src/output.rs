//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
///
/// Everything goes to stdout; errors are rendered separately on stderr by
/// `main::handle_error`.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        let no_color = args.no_color || config.output.no_color;

        Self {
            resolved_format,
            quiet: args.quiet,
            color: !no_color && resolved_format == OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.styled(msg, |m| m.to_owned())
    }

    /// Progress message (blue).
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.styled(msg, |m| m.blue().to_string())
    }

    /// Something the user should notice (yellow).
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.styled(msg, |m| m.yellow().to_string())
    }

    /// Completion message (bold green).
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.styled(msg, |m| m.green().bold().to_string())
    }

    /// A command the user can run next (cyan).
    pub fn hint(&self, msg: &str) -> io::Result<()> {
        self.styled(msg, |m| m.cyan().to_string())
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        self.styled(text, |m| m.cyan().bold().to_string())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        self.color
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    fn styled(&self, msg: &str, paint: impl FnOnce(&str) -> String) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.color { paint(msg) } else { msg.to_owned() };
        self.term.write_line(&line)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
