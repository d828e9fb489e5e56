//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "backstrap",
    bin_name = "backstrap",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f680} Generate an Express backend in one command",
    long_about = "Backstrap copies a ready-to-run Express backend into ./<NAME>, \
                  sets the package name and installs its dependencies.",
    after_help = "EXAMPLES:\n\
        \x20 backstrap my-api\n\
        \x20 backstrap MyApi --skip-install\n\
        \x20 backstrap my-api --template ./my-template --dry-run",
)]
pub struct Cli {
    /// Logging and output flags.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// What to generate.
    #[command(flatten)]
    pub generate: GenerateArgs,
}

/// Arguments for a generation run.
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Project name; becomes `./NAME` and, lower-cased, the package name.
    ///
    /// Optional at the parser level so a missing name is reported like any
    /// other usage error.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// Copy this directory instead of the bundled template.
    #[arg(
        short = 't',
        long = "template",
        value_name = "DIR",
        help = "Use a template directory instead of the bundled one"
    )]
    pub template: Option<PathBuf>,

    /// Copy and patch only; do not run the package manager.
    #[arg(long = "skip-install", help = "Do not install dependencies")]
    pub skip_install: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}
