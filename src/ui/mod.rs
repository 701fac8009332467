//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for pipes, scripts, and CI
//! - [`MockUI`] for tests
//! - Prompts, theme, and tables
//!
//! # Example
//!
//! ```
//! use prereqs::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet, false);
//! ui.show_header("Eligible courses");
//! ui.success("Done");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::prompt_user;
pub use table::Table;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, PrereqsTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// Commands only talk to this trait so they can be driven by [`MockUI`].
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Change the output mode.
    fn set_output_mode(&mut self, mode: OutputMode);

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every mode.
    fn error(&mut self, msg: &str);

    /// Write machine-readable output (`--json`) to stdout in every mode.
    fn data(&mut self, text: &str);

    /// Show a section header.
    fn show_header(&mut self, title: &str);

    /// Show a dim follow-up hint.
    fn show_hint(&mut self, hint: &str);

    /// Show a prompt and get user input.
    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult>;
}

/// A prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Key used for `PREREQS_PROMPT_<KEY>` overrides and test responses.
    pub key: String,
    /// The question to display.
    pub question: String,
}

impl Prompt {
    /// Free-form text prompt.
    pub fn input(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
        }
    }
}

/// Result of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResult {
    /// The line the user entered.
    String(String),
    /// The input stream ended before an answer was given.
    Closed,
}

impl PromptResult {
    /// Get as string. `Closed` is empty.
    pub fn as_string(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::Closed => String::new(),
        }
    }

    /// Whether input ended.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}
