//! prereqs CLI entry point.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use prereqs::cli::{Cli, CommandDispatcher};
use prereqs::config::find_project_root;
use prereqs::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("prereqs=debug,tower_http=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("prereqs=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("prereqs starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Nearest ancestor with .prereqs (or .git), else the current directory.
    let project_root = cli.project.clone().unwrap_or_else(|| {
        let cwd = std::env::current_dir().unwrap_or_default();
        find_project_root(&cwd).unwrap_or(cwd)
    });

    // Piped stdin answers prompts line by line.
    let is_interactive = std::io::stdin().is_terminal();
    let mut ui = create_ui(is_interactive, output_mode, cli.no_color);

    let dispatcher = CommandDispatcher::from_cli(project_root, &cli);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(e.exit_code())
        }
    }
}
