//! Config command implementation.
//!
//! `prereqs config` shows the resolved configuration and where it came from.

use crate::cli::args::ConfigArgs;
use crate::config::ConfigPaths;
use crate::error::{PrereqError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ProjectContext};

/// The config command implementation.
pub struct ConfigCommand {
    context: ProjectContext,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(context: &ProjectContext, args: ConfigArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.context.load_config()?;

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&config).map_err(|e| PrereqError::Other(e.into()))?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        match &self.context.config_path {
            Some(path) => ui.message(&format!("# {}", path.display())),
            None => {
                let paths = ConfigPaths::discover(&self.context.root);
                if paths.is_empty() {
                    ui.message("# defaults (no .prereqs/config.yml)");
                }
                for path in paths.all_existing() {
                    ui.message(&format!("# {}", path.display()));
                }
            }
        }

        let yaml = serde_yaml::to_string(&config).map_err(|e| PrereqError::Other(e.into()))?;
        ui.message(&yaml);

        let table = config.equivalence_table();
        if !table.is_empty() {
            ui.message("# effective equivalences");
            for (variant, canonical) in table.sorted_entries() {
                ui.message(&format!("#   {} → {}", variant, canonical));
            }
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

    fn setup_project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".prereqs");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), config).unwrap();
        temp
    }

    #[test]
    fn shows_defaults_without_config() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let result = ConfigCommand::new(&ProjectContext::new(temp.path()), ConfigArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_message("# defaults"));
        assert!(ui.has_message("description_limit: 100"));
        assert!(ui.has_message("CS_OX 170 → CS 170"));
    }

    #[test]
    fn shows_config_path_and_values() {
        let temp = setup_project("description_limit: 40\nbuiltin_equivalences: false");
        let mut ui = MockUI::new();
        ConfigCommand::new(&ProjectContext::new(temp.path()), ConfigArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_message("config.yml"));
        assert!(ui.has_message("description_limit: 40"));
        assert!(!ui.has_message("effective equivalences"));
    }

    #[test]
    fn json_output() {
        let temp = setup_project("strict: true");
        let mut ui = MockUI::new();
        ConfigCommand::new(&ProjectContext::new(temp.path()), ConfigArgs { json: true })
            .execute(&mut ui)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.data_output()).unwrap();
        assert_eq!(value["strict"], true);
        assert_eq!(value["catalog"]["path"], "cs_courses.json");
    }

    #[test]
    fn invalid_config_is_an_error() {
        let temp = setup_project("levels: ['150']");
        let err = ConfigCommand::new(&ProjectContext::new(temp.path()), ConfigArgs::default())
            .execute(&mut MockUI::new())
            .unwrap_err();
        assert!(matches!(err, PrereqError::ConfigValidationError { .. }));
    }
}
