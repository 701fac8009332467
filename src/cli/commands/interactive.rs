//! Interactive command implementation.
//!
//! Prompts for completed courses until the user types `quit` or input
//! ends, printing eligible courses after every answer. This is the
//! default when `prereqs` runs without a subcommand.

use crate::error::Result;
use crate::ui::{Prompt, PromptResult, UserInterface};

use super::dispatcher::{Command, CommandResult, ProjectContext};
use super::display::{parse_course_list, show_eligible};

/// Prompt key; `PREREQS_PROMPT_COMPLETED` answers the first prompt.
pub const COMPLETED_PROMPT_KEY: &str = "completed";

const QUIT: &str = "quit";

/// The interactive command implementation.
pub struct InteractiveCommand {
    context: ProjectContext,
}

impl InteractiveCommand {
    /// Create a new interactive command.
    pub fn new(context: &ProjectContext) -> Self {
        Self {
            context: context.clone(),
        }
    }
}

impl Command for InteractiveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.context.load_config_for(ui)?;
        let finder = self.context.open_finder(&config)?;

        ui.show_header("COURSE ELIGIBILITY CHECKER");
        ui.message("Enter the courses you have completed.");
        ui.message("Format: CS 170, CS 171, MATH 221 (comma-separated)");
        ui.message("Type 'quit' to exit");

        let prompt = Prompt::input(COMPLETED_PROMPT_KEY, "Completed courses");

        loop {
            let answer = match ui.prompt(&prompt)? {
                PromptResult::Closed => break,
                other => other.as_string(),
            };
            let answer = answer.trim();

            if answer.eq_ignore_ascii_case(QUIT) {
                break;
            }

            let completed = parse_course_list(answer);
            if completed.is_empty() {
                ui.warning("Please enter at least one course.");
                continue;
            }

            ui.message("Searching for courses you can take...");
            let result = finder.find_eligible(&completed);
            show_eligible(ui, &result, &config.levels);
        }

        ui.message("Goodbye!");
        Ok(CommandResult::success())
    }
}
