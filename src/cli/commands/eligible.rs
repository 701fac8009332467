//! Eligible command implementation.
//!
//! `prereqs eligible --completed "CS 170,CS 171"` lists every catalog
//! course whose prerequisites are met.

use crate::cli::args::EligibleArgs;
use crate::error::{PrereqError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ProjectContext};
use super::display::{show_eligible, show_ineligible};

/// The eligible command implementation.
pub struct EligibleCommand {
    context: ProjectContext,
    args: EligibleArgs,
}

impl EligibleCommand {
    /// Create a new eligible command.
    pub fn new(context: &ProjectContext, args: EligibleArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &EligibleArgs {
        &self.args
    }
}

impl Command for EligibleCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.context.load_config_for(ui)?;
        let finder = self.context.open_finder(&config)?;

        let completed: Vec<&str> = self
            .args
            .completed
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .collect();

        if completed.is_empty() {
            ui.error("Please enter at least one course.");
            return Ok(CommandResult::failure(2));
        }

        let result = finder.find_eligible(&completed);

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&result).map_err(|e| PrereqError::Other(e.into()))?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        show_eligible(ui, &result, &config.levels);
        if self.args.show_ineligible {
            show_ineligible(ui, &result.ineligible);
        } else if !result.ineligible.is_empty() {
            ui.show_hint(&format!(
                "{} more course(s) need other prerequisites; rerun with --show-ineligible",
                result.ineligible.len()
            ));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    const CATALOG: &str = r#"[
        {"course_code": "CS 170", "course_name": "Intro to CS I", "description": "Programming basics", "requisites": "None"},
        {"course_code": "CS 171", "course_name": "Intro to CS II", "description": "Data structures", "requisites": "CS 170"},
        {"course_code": "CS 253", "course_name": "Data Structures and Algorithms", "description": "", "requisites": "CS 171 and CS 224"}
    ]"#;

    fn setup_project() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("cs_courses.json"), CATALOG).unwrap();
        temp
    }

    fn args(completed: &[&str]) -> EligibleArgs {
        EligibleArgs {
            completed: completed.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn lists_eligible_courses() {
        let temp = setup_project();
        let cmd = EligibleCommand::new(&ProjectContext::new(temp.path()), args(&["CS 170"]));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("YOU CAN TAKE 1 COURSES:"));
        assert!(ui.has_message("CS 171: Intro to CS II"));
        assert!(!ui.has_message("CS 170:"));
        assert!(ui.has_hint("--show-ineligible"));
    }

    #[test]
    fn shows_ineligible_on_request() {
        let temp = setup_project();
        let mut a = args(&["CS_OX 170"]);
        a.show_ineligible = true;
        let cmd = EligibleCommand::new(&ProjectContext::new(temp.path()), a);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("CS 253: Data Structures and Algorithms"));
        assert!(ui.has_message("• CS 171"));
        assert!(ui.has_message("• CS 224"));
    }

    #[test]
    fn json_output() {
        let temp = setup_project();
        let mut a = args(&["CS 170", "CS 171"]);
        a.json = true;
        let cmd = EligibleCommand::new(&ProjectContext::new(temp.path()), a);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.data_output()).unwrap();
        assert_eq!(value["eligible"].as_array().unwrap().len(), 0);
        assert_eq!(value["ineligible"][0]["code"], "CS 253");
        assert_eq!(value["ineligible"][0]["missing"], serde_json::json!([["CS 224"]]));
    }

    #[test]
    fn blank_completed_list_is_rejected() {
        let temp = setup_project();
        let cmd = EligibleCommand::new(&ProjectContext::new(temp.path()), args(&[" ", ""]));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("at least one course"));
    }

    #[test]
    fn missing_catalog_is_an_error() {
        let temp = TempDir::new().unwrap();
        let cmd = EligibleCommand::new(&ProjectContext::new(temp.path()), args(&["CS 170"]));
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, PrereqError::CatalogNotFound { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn catalog_override_is_used() {
        let temp = setup_project();
        let other = temp.path().join("other.json");
        fs::write(
            &other,
            r#"[{"course_code": "MATH 221", "course_name": "Linear Algebra", "description": "", "requisites": ""}]"#,
        )
        .unwrap();
        let ctx = ProjectContext::new(temp.path()).with_catalog(&other);
        let cmd = EligibleCommand::new(&ctx, args(&["CS 170"]));
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("MATH 221: Linear Algebra"));
        assert!(!ui.has_message("CS 171"));
    }

    fn write_config(temp: &TempDir, config: &str) {
        let dir = temp.path().join(".prereqs");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), config).unwrap();
    }

    #[test]
    fn strict_config_flags_unreadable_requisites() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("cs_courses.json"),
            r#"[
                {"course_code": "CS 171", "course_name": "Intro to CS II", "requisites": "CS 170"},
                {"course_code": "CS 485", "course_name": "Research", "requisites": "Permission of instructor"}
            ]"#,
        )
        .unwrap();
        write_config(&temp, "strict: true\n");

        let mut ui = MockUI::new();
        EligibleCommand::new(&ProjectContext::new(temp.path()), args(&["CS 170"]))
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_success("YOU CAN TAKE 1 COURSES:"));
        assert!(!ui.has_header("400-Level Courses"));
        assert!(ui.has_warning("Could not read prerequisites for 1 course(s)"));
        assert!(ui.has_message("CS 485"));

        let mut a = args(&["CS 170"]);
        a.json = true;
        let mut ui = MockUI::new();
        EligibleCommand::new(&ProjectContext::new(temp.path()), a)
            .execute(&mut ui)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&ui.data_output()).unwrap();
        assert_eq!(value["unparsed"][0]["code"], "CS 485");
    }

    #[test]
    fn json_ignores_silent_output_mode() {
        let temp = setup_project();
        write_config(&temp, "default_output: silent\n");
        let mut a = args(&["CS 170"]);
        a.json = true;
        let mut ui = MockUI::new();

        EligibleCommand::new(&ProjectContext::new(temp.path()), a)
            .execute(&mut ui)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.data_output()).unwrap();
        assert_eq!(value["eligible"][0]["code"], "CS 171");
    }
}
