//! Command-line interface for prereqs.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, CompletionsArgs, ConfigArgs, EligibleArgs, ExplainArgs, LintArgs, ParseArgs,
    ServeArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult, ProjectContext};
