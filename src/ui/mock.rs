//! Mock UI implementation for testing.
//!
//! `MockUI` captures every interaction for later assertion and answers
//! prompts from queued responses.
//!
//! # Example
//!
//! ```
//! use prereqs::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_prompt_responses("completed", vec!["CS 170", "quit"]);
//!
//! let prompt = Prompt::input("completed", "Completed courses");
//! assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "CS 170");
//! ui.success("Done");
//!
//! assert!(ui.has_success("Done"));
//! assert_eq!(ui.prompts_shown(), ["completed"]);
//! ```

use std::collections::{HashMap, VecDeque};

use crate::error::Result;

use super::{OutputMode, Prompt, PromptResult, UserInterface};

/// Mock UI implementation for testing.
///
/// Prompts with no queued or configured response report
/// [`PromptResult::Closed`], like an input stream at EOF. Status output
/// (messages, successes, warnings) is dropped in silent mode, as the real
/// UIs do; errors and data are always kept.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    hints: Vec<String>,
    data: Vec<String>,
    prompt_responses: HashMap<String, String>,
    prompt_queues: HashMap<String, VecDeque<String>>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Answer every prompt with this key with `response`.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Queue responses for a key; they are returned in order.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: Vec<&str>) {
        let queue = responses.into_iter().map(|s| s.to_string()).collect();
        self.prompt_queues.insert(key.to_string(), queue);
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Keys of the prompts shown, in order.
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// All captured messages joined by newlines.
    pub fn output(&self) -> String {
        self.messages.join("\n")
    }

    /// All machine-readable output joined by newlines.
    pub fn data_output(&self) -> String {
        self.data.join("\n")
    }

    /// Check if a message containing `msg` was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a success containing `msg` was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a warning containing `msg` was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if an error containing `msg` was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a header containing `title` was shown.
    pub fn has_header(&self, title: &str) -> bool {
        self.headers.iter().any(|h| h.contains(title))
    }

    /// Check if a hint containing `hint` was shown.
    pub fn has_hint(&self, hint: &str) -> bool {
        self.hints.iter().any(|h| h.contains(hint))
    }

    fn next_response(&mut self, key: &str) -> Option<String> {
        if let Some(response) = self.prompt_queues.get_mut(key).and_then(|q| q.pop_front()) {
            return Some(response);
        }
        self.prompt_responses.get(key).cloned()
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.messages.push(msg.to_string());
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.successes.push(msg.to_string());
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.warnings.push(msg.to_string());
        }
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn data(&mut self, text: &str) {
        self.data.push(text.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts_shown.push(prompt.key.clone());

        Ok(match self.next_response(&prompt.key) {
            Some(answer) => PromptResult::String(answer),
            None => PromptResult::Closed,
        })
    }
}
