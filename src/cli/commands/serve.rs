//! Serve command implementation.
//!
//! `prereqs serve` loads the catalog once and answers eligibility queries
//! over HTTP until interrupted.

use std::net::SocketAddr;

use tracing::debug;

use crate::cli::args::ServeArgs;
use crate::error::{PrereqError, Result};
use crate::server::{run_server, AppState};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ProjectContext};

/// The serve command implementation.
pub struct ServeCommand {
    context: ProjectContext,
    args: ServeArgs,
}

impl ServeCommand {
    /// Create a new serve command.
    pub fn new(context: &ProjectContext, args: ServeArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }
}

fn parse_bind(bind: &str) -> Result<SocketAddr> {
    bind.parse()
        .map_err(|e| PrereqError::ConfigValidationError {
            message: format!("invalid bind address {:?}: {}", bind, e),
        })
}

impl Command for ServeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.context.load_config_for(ui)?;
        let bind = self.args.bind.as_deref().unwrap_or(&config.server.bind);
        let addr = parse_bind(bind)?;

        // Remote catalogs use a blocking client, so load before the runtime exists.
        let finder = self.context.open_finder(&config)?;
        ui.success(&format!(
            "Loaded {} courses, listening on http://{}",
            finder.catalog().len(),
            addr
        ));
        ui.show_hint("Press Ctrl-C to stop");

        let state = AppState::new(finder, config.levels.clone());
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        debug!("Tokio runtime started");
        runtime.block_on(run_server(state, addr))?;

        Ok(CommandResult::success())
    }
}
