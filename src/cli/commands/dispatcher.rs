//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`ProjectContext`] for the project-level flags every command shares
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::catalog::{open_finder, CourseFinder, OpenOptions};
use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, PrereqsConfig};
use crate::error::Result;
use crate::ui::{OutputMode, UserInterface};

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Project root plus the global overrides that decide how it is read.
#[derive(Debug, Clone, Default)]
pub struct ProjectContext {
    /// Project root directory.
    pub root: PathBuf,
    /// Single config file replacing discovery.
    pub config_path: Option<PathBuf>,
    /// Catalog file replacing the configured source.
    pub catalog: Option<PathBuf>,
    /// Bypass the remote catalog cache.
    pub refresh: bool,
}

impl ProjectContext {
    /// Context for `root` with no overrides.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Use `path` as the catalog.
    pub fn with_catalog(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog = Some(path.into());
        self
    }

    /// Load and validate configuration.
    pub fn load_config(&self) -> Result<PrereqsConfig> {
        load_config(&self.root, self.config_path.as_deref())
    }

    /// Load configuration and apply its `default_output` when the UI is
    /// still at the default mode.
    pub fn load_config_for(&self, ui: &mut dyn UserInterface) -> Result<PrereqsConfig> {
        let config = self.load_config()?;
        if ui.output_mode() == OutputMode::Normal {
            if let Some(mode) = config.default_output {
                ui.set_output_mode(mode.into());
            }
        }
        Ok(config)
    }

    /// Build the course finder for this project.
    pub fn open_finder(&self, config: &PrereqsConfig) -> Result<CourseFinder> {
        let options = OpenOptions {
            catalog: self.catalog.as_deref(),
            refresh: self.refresh,
        };
        open_finder(config, &self.root, &options)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: ProjectContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            context: ProjectContext::new(project_root),
        }
    }

    /// Create a dispatcher carrying the global overrides from `cli`.
    pub fn from_cli(project_root: PathBuf, cli: &Cli) -> Self {
        Self {
            context: ProjectContext {
                root: project_root,
                config_path: cli.config.clone(),
                catalog: cli.catalog.clone(),
                refresh: cli.refresh,
            },
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.context.root
    }

    /// Get the shared project context.
    pub fn context(&self) -> &ProjectContext {
        &self.context
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        debug!("Dispatching in {}", self.context.root.display());
        let ctx = &self.context;

        match &cli.command {
            Some(Commands::Eligible(args)) => {
                super::eligible::EligibleCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Explain(args)) => {
                super::explain::ExplainCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Parse(args)) => {
                super::parse::ParseCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Lint(args)) => {
                super::lint::LintCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Serve(args)) => {
                super::serve::ServeCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Config(args)) => {
                super::config::ConfigCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            Some(Commands::Interactive) | None => {
                super::interactive::InteractiveCommand::new(ctx).execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(2);
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"));
        assert_eq!(dispatcher.project_root(), Path::new("/test"));
        assert!(dispatcher.context().catalog.is_none());
    }

    #[test]
    fn dispatcher_carries_global_overrides() {
        let cli = Cli::parse_from([
            "prereqs",
            "--config",
            "alt.yml",
            "--catalog",
            "data.json",
            "--refresh",
            "lint",
        ]);
        let dispatcher = CommandDispatcher::from_cli(PathBuf::from("/p"), &cli);
        let ctx = dispatcher.context();
        assert_eq!(ctx.config_path, Some(PathBuf::from("alt.yml")));
        assert_eq!(ctx.catalog, Some(PathBuf::from("data.json")));
        assert!(ctx.refresh);
    }

    #[test]
    fn config_default_output_applies_only_at_normal() {
        use crate::ui::MockUI;
        use std::fs;
        use tempfile::TempDir;

        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".prereqs")).unwrap();
        fs::write(
            temp.path().join(".prereqs/config.yml"),
            "default_output: quiet",
        )
        .unwrap();
        let ctx = ProjectContext::new(temp.path());

        let mut ui = MockUI::new();
        ctx.load_config_for(&mut ui).unwrap();
        assert_eq!(ui.output_mode(), OutputMode::Quiet);

        let mut verbose = MockUI::with_mode(OutputMode::Verbose);
        ctx.load_config_for(&mut verbose).unwrap();
        assert_eq!(verbose.output_mode(), OutputMode::Verbose);
    }
}
