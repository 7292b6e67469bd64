//! Requirement checking.
//!
//! Tools the site build depends on are described as [`Requirement`]s and
//! checked by launching them once.
//!
//! # Modules
//!
//! - [`checker`] - Launches an executable and reports whether it started
//! - [`registry`] - Requirement definitions and user-facing messages

pub mod checker;
pub mod registry;

pub use checker::check_binary_available;
pub use registry::{Requirement, HUGO_INSTALL_URL};
