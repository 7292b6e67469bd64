//! CLI argument definitions.
//!
//! The tool takes no arguments of its own; every flag is optional and the
//! defaults check for `hugo` on `PATH`.

use clap::Parser;

/// Verify that hugo is installed before building the site.
#[derive(Debug, Parser)]
#[command(name = "check-hugo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Executable to launch instead of `hugo` on PATH
    #[arg(long = "hugo", value_name = "PATH", env = "HUGO_BIN")]
    pub hugo: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
