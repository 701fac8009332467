//! Parse command implementation.
//!
//! `prereqs parse "CS 171 and MATH 221 or MATH 275"` prints one line per
//! AND group, so catalog wording can be checked without a catalog.

use crate::cli::args::ParseArgs;
use crate::error::{PrereqError, Result};
use crate::requirements::{PrerequisiteParser, Requirement};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ProjectContext};

/// The parse command implementation.
pub struct ParseCommand {
    context: ProjectContext,
    args: ParseArgs,
}

impl ParseCommand {
    /// Create a new parse command.
    pub fn new(context: &ProjectContext, args: ParseArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }

    fn show(&self, ui: &mut dyn UserInterface, requirement: &Requirement) -> Result<()> {
        if self.args.json {
            let json = serde_json::to_string_pretty(requirement)
                .map_err(|e| PrereqError::Other(e.into()))?;
            ui.data(&json);
            return Ok(());
        }

        if requirement.is_empty() {
            ui.message("(none)");
            return Ok(());
        }

        ui.show_header(&format!("{} requirement group(s)", requirement.len()));
        for group in requirement.groups() {
            ui.message(&group.to_string());
        }
        Ok(())
    }
}

impl Command for ParseCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.context.load_config_for(ui)?;
        let parser = PrerequisiteParser::new(config.normalizer());

        let requirement = if self.args.strict || config.strict {
            match parser.parse_strict("input", &self.args.text) {
                Ok(requirement) => requirement,
                Err(e @ PrereqError::UnparsedRequisites { .. }) => {
                    ui.error(&e.to_string());
                    return Ok(CommandResult::failure(1));
                }
                Err(e) => return Err(e),
            }
        } else {
            parser.parse(&self.args.text)
        };

        self.show(ui, &requirement)?;
        Ok(CommandResult::success())
    }
}
