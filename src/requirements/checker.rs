//! Binary availability checking.
//!
//! The check only asks whether the OS could start the executable. Once the
//! child is running, the tool counts as present: its output is discarded
//! and its exit status is not consulted.

use std::ffi::OsStr;
use std::process::{Command, Stdio};

use crate::error::{CheckError, Result};

/// Launch `program` with `args` and wait for it to finish.
///
/// Returns `Ok(())` when the process started, even if it then exited with a
/// non-zero status. Any spawn error becomes [`CheckError::LaunchFailed`].
/// Blocks until the child exits; there is no timeout.
pub fn check_binary_available<I, S>(program: &str, args: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    tracing::debug!("Launching {}", program);

    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|source| CheckError::LaunchFailed {
            program: program.to_string(),
            source,
        })?;

    if status.success() {
        tracing::debug!("{} exited successfully", program);
    } else {
        tracing::debug!("{} launched but exited with {:?}", program, status.code());
    }

    Ok(())
}
