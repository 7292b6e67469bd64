//! Error types for requirement checks.
//!
//! There is exactly one way a check can fail: the executable could not be
//! started. Every cause (not on `PATH`, permission denied, bad format) is
//! reported through [`CheckError::LaunchFailed`] and handled the same way.

use thiserror::Error;

/// Error raised when a required executable cannot be launched.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The OS refused to start the executable.
    #[error("Failed to launch '{program}': {source}")]
    LaunchFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl CheckError {
    /// The executable that failed to launch.
    pub fn program(&self) -> &str {
        match self {
            CheckError::LaunchFailed { program, .. } => program,
        }
    }
}

/// Result type alias for check operations.
pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    fn not_found() -> CheckError {
        CheckError::LaunchFailed {
            program: "hugo".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        }
    }

    #[test]
    fn launch_failed_displays_program_and_cause() {
        let msg = not_found().to_string();
        assert!(msg.contains("hugo"));
        assert!(msg.contains("No such file or directory"));
    }

    #[test]
    fn launch_failed_exposes_io_source() {
        let err = not_found();
        let source = err
            .source()
            .and_then(|s| s.downcast_ref::<io::Error>())
            .expect("io source");
        assert_eq!(source.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn program_accessor() {
        assert_eq!(not_found().program(), "hugo");
    }
}
