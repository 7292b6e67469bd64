//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing successes to stdout and errors to stderr
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use check_hugo::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("hugo found.");
//! assert_eq!(ui.successes(), ["hugo found."]);
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, Theme};

/// Trait for user interface output.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
