//! Lint command implementation.
//!
//! `prereqs lint` lists catalog courses whose requisite text names no
//! course code. Those courses read as "no prerequisites" in every query,
//! which is rarely what the catalog meant.

use serde::Serialize;

use crate::cli::args::LintArgs;
use crate::error::{PrereqError, Result};
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult, ProjectContext};

/// One unparsed catalog entry.
#[derive(Debug, Serialize)]
struct Finding<'a> {
    course: &'a str,
    requisites: &'a str,
}

/// The lint command implementation.
pub struct LintCommand {
    context: ProjectContext,
    args: LintArgs,
}

impl LintCommand {
    /// Create a new lint command.
    pub fn new(context: &ProjectContext, args: LintArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }
}

impl Command for LintCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.context.load_config_for(ui)?;
        let finder = self.context.open_finder(&config)?;

        let findings: Vec<Finding<'_>> = finder
            .unparsed_courses()
            .into_iter()
            .map(|course| Finding {
                course: course.code.as_str(),
                requisites: &course.raw_prerequisites,
            })
            .collect();

        if self.args.json {
            let json = serde_json::to_string_pretty(&findings)
                .map_err(|e| PrereqError::Other(e.into()))?;
            ui.data(&json);
        } else if findings.is_empty() {
            ui.success(&format!(
                "All {} courses have readable prerequisites",
                finder.catalog().len()
            ));
        } else {
            let mut table = Table::new(vec!["Course", "Requisites"]);
            for finding in &findings {
                table.add_row(&[finding.course, finding.requisites]);
            }
            ui.message(&table.render());
            ui.warning(&format!(
                "{} of {} courses name no prerequisite course and will be treated as open",
                findings.len(),
                finder.catalog().len()
            ));
        }

        if findings.is_empty() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
