//! Requirement definitions.
//!
//! A [`Requirement`] names an external tool, the command used to probe it,
//! and where the user can find install instructions.

use crate::error::Result;

use super::checker::check_binary_available;

/// Install instructions for hugo.
pub const HUGO_INSTALL_URL: &str = "https://gohugo.io/overview/installing/";

/// An external tool that must be launchable before continuing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Name shown to the user (e.g., "hugo").
    pub name: String,
    /// Executable to launch. Usually the same as `name`.
    pub program: String,
    /// Arguments passed when probing the executable.
    pub args: Vec<String>,
    /// Where to find install instructions.
    pub install_url: String,
}

impl Requirement {
    /// The built-in hugo requirement, probed with `hugo version`.
    pub fn hugo() -> Self {
        Self {
            name: "hugo".to_string(),
            program: "hugo".to_string(),
            args: vec!["version".to_string()],
            install_url: HUGO_INSTALL_URL.to_string(),
        }
    }

    /// Launch a different executable for this requirement.
    ///
    /// The display name and install URL are kept.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Check whether the requirement's executable can be launched.
    pub fn check(&self) -> Result<()> {
        check_binary_available(&self.program, &self.args)
    }

    /// Message shown when the executable launched.
    pub fn found_message(&self) -> String {
        format!("{} found.", self.name)
    }

    /// Message shown when the executable could not be launched.
    pub fn missing_message(&self) -> String {
        format!(
            "{} not found. You must setup {} ({}) before continuing.",
            self.name, self.name, self.install_url
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hugo_probes_version_subcommand() {
        let req = Requirement::hugo();
        assert_eq!(req.name, "hugo");
        assert_eq!(req.program, "hugo");
        assert_eq!(req.args, vec!["version".to_string()]);
        assert_eq!(req.install_url, HUGO_INSTALL_URL);
    }

    #[test]
    fn with_program_keeps_name_and_url() {
        let req = Requirement::hugo().with_program("/opt/hugo/bin/hugo");
        assert_eq!(req.program, "/opt/hugo/bin/hugo");
        assert_eq!(req.name, "hugo");
        assert_eq!(req.install_url, HUGO_INSTALL_URL);
    }

    #[test]
    fn found_message_names_tool() {
        assert_eq!(Requirement::hugo().found_message(), "hugo found.");
    }

    #[test]
    fn missing_message_includes_install_url() {
        let msg = Requirement::hugo().missing_message();
        assert!(msg.starts_with("hugo not found."));
        assert!(msg.contains("https://gohugo.io/overview/installing/"));
    }

    #[test]
    fn check_reports_missing_program() {
        let req = Requirement::hugo().with_program("check-hugo-no-such-binary-4f1c");
        assert!(req.check().is_err());
    }
}
