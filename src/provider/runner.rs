use crate::error::{Error, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Runs an executable and returns its combined output as text.
pub trait CommandRunner {
    /// # Errors
    ///
    /// Returns [`Error::InvocationFailed`] if the program cannot be started
    /// or exits unsuccessfully.
    fn run(&self, program: &Path, args: &[&str]) -> Result<String>;
}

/// Runs programs with [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[&str]) -> Result<String> {
        debug!(program = %program.display(), ?args, "running");

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| Error::InvocationFailed {
                path: program.to_path_buf(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(Error::InvocationFailed {
                path: program.to_path_buf(),
                reason: output.status.to_string(),
            });
        }

        // Qt Creator prints to stdout on some platforms and stderr on others.
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(text)
    }
}
