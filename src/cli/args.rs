//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// prereqs - which courses can I take next?
#[derive(Debug, Parser)]
#[command(name = "prereqs")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides .prereqs/config.yml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Course catalog file (overrides catalog settings in config)
    #[arg(long, global = true, env = "PREREQS_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Re-download a remote catalog instead of using the cache
    #[arg(long, global = true)]
    pub refresh: bool,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the courses you can take next
    Eligible(EligibleArgs),

    /// Explain whether you can take one course
    Explain(ExplainArgs),

    /// Show how a prerequisite sentence is read
    Parse(ParseArgs),

    /// Find catalog courses whose prerequisites name no course
    Lint(LintArgs),

    /// Prompt for completed courses in a loop (default if no command specified)
    Interactive,

    /// Serve the eligibility API over HTTP
    Serve(ServeArgs),

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `eligible` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EligibleArgs {
    /// Completed courses (comma-separated, e.g. "CS 170,CS 171")
    #[arg(short = 'C', long, value_delimiter = ',', required = true)]
    pub completed: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Also list courses you cannot take yet, with what's missing
    #[arg(long)]
    pub show_ineligible: bool,
}

/// Arguments for the `explain` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ExplainArgs {
    /// Course to check, e.g. "CS 253"
    pub course: String,

    /// Completed courses (comma-separated)
    #[arg(short = 'C', long, value_delimiter = ',')]
    pub completed: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `parse` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ParseArgs {
    /// Prerequisite text as written in the catalog
    pub text: String,

    /// Fail when non-empty text yields no requirement
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `lint` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LintArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `serve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ServeArgs {
    /// Address to listen on (overrides server.bind)
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<String>,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
