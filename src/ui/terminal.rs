//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, Theme, UserInterface};

/// Terminal output: successes on stdout, errors on stderr.
pub struct TerminalUI {
    stdout: Term,
    stderr: Term,
    stdout_theme: Theme,
    stderr_theme: Theme,
}

impl TerminalUI {
    /// Create a terminal UI, picking colors per stream.
    pub fn new(no_color: bool) -> Self {
        let stdout = Term::stdout();
        let stderr = Term::stderr();
        let theme_for = |term: &Term| {
            if !no_color && should_use_colors(term) {
                Theme::new()
            } else {
                Theme::plain()
            }
        };

        Self {
            stdout_theme: theme_for(&stdout),
            stderr_theme: theme_for(&stderr),
            stdout,
            stderr,
        }
    }
}

impl UserInterface for TerminalUI {
    fn success(&mut self, msg: &str) {
        writeln!(self.stdout, "{}", self.stdout_theme.format_success(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.stderr, "{}", self.stderr_theme.format_error(msg)).ok();
    }
}
