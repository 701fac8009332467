//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every command that reads the
//! catalog goes through [`ProjectContext`], so global flags (`--config`,
//! `--catalog`, `--refresh`) apply the same way everywhere.

pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod display;
pub mod eligible;
pub mod explain;
pub mod interactive;
pub mod lint;
pub mod parse;
pub mod serve;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, ProjectContext};
