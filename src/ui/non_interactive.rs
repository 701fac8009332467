//! Non-interactive UI for pipes, scripts, and CI.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use crate::error::Result;

use super::{OutputMode, Prompt, PromptResult, UserInterface};

/// Prefix of environment variables that answer prompts.
pub const PROMPT_ENV_PREFIX: &str = "PREREQS_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered, in order, by a `PREREQS_PROMPT_<KEY>` variable
/// (used once), then by a line read from the input stream. Prompts
/// report [`PromptResult::Closed`] once the stream ends.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
    input: Box<dyn BufRead>,
}

impl NonInteractiveUI {
    /// Create a UI reading answers from stdin.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
            input: Box::new(io::BufReader::new(io::stdin())),
        }
    }

    /// Create with explicit overrides and input (for testing).
    pub fn with_input(
        mode: OutputMode,
        overrides: HashMap<String, String>,
        input: Box<dyn BufRead>,
    ) -> Self {
        Self {
            mode,
            env_overrides: overrides,
            input,
        }
    }

    fn read_answer(&mut self, prompt: &Prompt) -> Result<Option<String>> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        if let Some(value) = self.env_overrides.remove(&env_key) {
            return Ok(Some(value));
        }

        if self.mode.shows_status() {
            print!("{}: ", prompt.question);
            io::stdout().flush().ok();
        }

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn data(&mut self, text: &str) {
        println!("{}", text);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_decorations() {
            println!("\n{}\n", title);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_decorations() {
            println!("  {}", hint);
        }
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        Ok(match self.read_answer(prompt)? {
            Some(text) => PromptResult::String(text),
            None => PromptResult::Closed,
        })
    }
}
