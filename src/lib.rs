//! check-hugo - verify that hugo is installed before building the site.
//!
//! The check launches `hugo version` once. If the OS can start the
//! executable the tool is considered present; its output and exit status
//! are ignored.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Requirement definitions and the launch check
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use check_hugo::requirements::check_binary_available;
//!
//! let outcome = check_binary_available("check-hugo-no-such-binary", ["version"]);
//! assert!(outcome.is_err());
//! ```

pub mod cli;
pub mod error;
pub mod requirements;
pub mod ui;

pub use error::{CheckError, Result};
