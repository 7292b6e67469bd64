//! Check command implementation.
//!
//! Launches the requirement once and turns the outcome into a message and
//! an exit code. A launch failure is never retried.

use crate::error::Result;
use crate::requirements::Requirement;
use crate::ui::UserInterface;

use super::{Command, CommandResult};

/// Exit code when the required executable cannot be launched.
pub const EXIT_MISSING: i32 = 1;

/// The check command implementation.
pub struct CheckCommand {
    requirement: Requirement,
}

impl CheckCommand {
    /// Create a check command for a requirement.
    pub fn new(requirement: Requirement) -> Self {
        Self { requirement }
    }

    /// Get the requirement being checked.
    pub fn requirement(&self) -> &Requirement {
        &self.requirement
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match self.requirement.check() {
            Ok(()) => {
                ui.success(&self.requirement.found_message());
                Ok(CommandResult::success())
            }
            Err(e) => {
                tracing::debug!("{}", e);
                ui.error(&self.requirement.missing_message());
                Ok(CommandResult::failure(EXIT_MISSING))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    fn command_for(program: &str) -> CheckCommand {
        CheckCommand::new(Requirement::hugo().with_program(program))
    }

    #[test]
    fn missing_program_reports_install_hint() {
        let mut ui = MockUI::new();
        let result = command_for("check-hugo-no-such-binary-4f1c")
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result, CommandResult::failure(1));
        assert!(ui.successes().is_empty());
        assert_eq!(ui.errors().len(), 1);
        assert!(ui.errors()[0].contains("not found"));
        assert!(ui.errors()[0].contains("https://gohugo.io/overview/installing/"));
    }

    #[cfg(unix)]
    #[test]
    fn launchable_program_reports_found() {
        let mut ui = MockUI::new();
        let result = command_for("true").execute(&mut ui).unwrap();

        assert_eq!(result, CommandResult::success());
        assert_eq!(ui.successes(), ["hugo found."]);
        assert!(!ui.has_errors());
    }

    #[cfg(unix)]
    #[test]
    fn failing_program_still_reports_found() {
        let mut ui = MockUI::new();
        let result = command_for("false").execute(&mut ui).unwrap();

        assert_eq!(result, CommandResult::success());
        assert_eq!(ui.successes(), ["hugo found."]);
    }

    #[test]
    fn requirement_accessor() {
        let cmd = CheckCommand::new(Requirement::hugo());
        assert_eq!(cmd.requirement().name, "hugo");
    }
}
