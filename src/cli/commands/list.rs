//! List command implementation.
//!
//! `gauntlet --list` shows every check with the command it would run,
//! after configuration overrides and package substitution.

use std::path::{Path, PathBuf};

use crate::checks::{CheckCatalog, CheckDefinition};
use crate::config::{load_config, resolve_package};
use crate::error::Result;
use crate::requirements::Prerequisite;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    package: Option<String>,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, config_path: Option<PathBuf>, package: Option<String>) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path,
            package,
        }
    }
}

/// One line per check: identifier padded to align the commands.
pub fn format_definition(definition: &CheckDefinition) -> String {
    format!("  {:<20} {}", definition.name.as_str(), definition.command)
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        let package = resolve_package(self.package.as_deref(), &config, &self.project_root);
        let catalog = CheckCatalog::with_overrides(&package, &config.checks);

        ui.show_header(&format!("Checks for {}", catalog.package()));
        for definition in catalog.iter() {
            ui.message(&format_definition(definition));
        }

        match Prerequisite::from_config(&config.prerequisite) {
            Some(prerequisite) => ui.message(&format!(
                "Prerequisite: {} (expects '{}')",
                prerequisite.command_line(),
                prerequisite.marker
            )),
            None => ui.message("Prerequisite: disabled"),
        }

        Ok(CommandResult::success())
    }
}
