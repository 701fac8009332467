//! Explain command implementation.
//!
//! `prereqs explain "CS 253" --completed "CS 171"` checks one course.
//! Exit code 0 means eligible and 1 means something is missing.

use serde_json::json;

use crate::cli::args::ExplainArgs;
use crate::error::{PrereqError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ProjectContext};
use super::display::show_check;

/// The explain command implementation.
pub struct ExplainCommand {
    context: ProjectContext,
    args: ExplainArgs,
}

impl ExplainCommand {
    /// Create a new explain command.
    pub fn new(context: &ProjectContext, args: ExplainArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }
}

impl Command for ExplainCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.context.load_config_for(ui)?;
        let finder = self.context.open_finder(&config)?;
        let check = finder.check_course(&self.args.course, &self.args.completed)?;

        if self.args.json {
            let body = json!({
                "course": check.code,
                "name": check.name,
                "eligible": check.result.eligible,
                "already_completed": check.already_completed,
                "requirement": check.requirement,
                "missing": check.result.missing_groups,
                "explanation": check.explanation(),
            });
            let text =
                serde_json::to_string_pretty(&body).map_err(|e| PrereqError::Other(e.into()))?;
            ui.data(&text);
        } else {
            show_check(ui, &check);
        }

        if check.result.eligible {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
