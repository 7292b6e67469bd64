//! check-hugo entry point.

use std::process::ExitCode;

use check_hugo::cli::{CheckCommand, Cli, Command};
use check_hugo::requirements::Requirement;
use check_hugo::ui::{TerminalUI, UserInterface};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so stdout only carries the result line.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("check_hugo=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("check_hugo=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("check-hugo starting with args: {:?}", cli);

    let mut requirement = Requirement::hugo();
    if let Some(program) = &cli.hugo {
        requirement = requirement.with_program(program.as_str());
    }

    let mut ui = TerminalUI::new(cli.no_color);

    match CheckCommand::new(requirement).execute(&mut ui) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
