//! Shell command execution with captured output
//!
//! Commands run synchronously through the host shell. There is no timeout: a
//! command that never exits blocks the caller forever.

use std::path::{Path, PathBuf};
use std::process::{self, Stdio};

use crate::{Error, Result};

/// Captured result of a finished command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` if the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// A command line passed verbatim to the shell.
///
/// Quoting and escaping are the caller's responsibility.
#[derive(Debug, Clone)]
pub struct Command {
    command: String,
    shell: Option<String>,
    current_dir: Option<PathBuf>,
}

impl Command {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            shell: None,
            current_dir: None,
        }
    }

    /// Run through `shell -c` instead of the platform default.
    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = Some(shell.into());
        self
    }

    /// Run inside `dir`.
    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.current_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn as_str(&self) -> &str {
        &self.command
    }

    /// Run the command and return its standard output.
    ///
    /// Standard error is discarded (see [`Command::run`] to keep it) and a
    /// non-zero exit status is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the working directory does not exist and
    /// [`Error::ProcessLaunch`] if the shell cannot be started.
    pub fn execute(&self) -> Result<String> {
        self.run().map(|output| output.stdout)
    }

    /// Run the command and capture both output streams and the exit code.
    pub fn run(&self) -> Result<CommandOutput> {
        if let Some(dir) = &self.current_dir
            && !dir.is_dir()
        {
            return Err(Error::NotFound { path: dir.clone() });
        }

        let mut cmd = self.shell_command();
        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }

        tracing::debug!(command = %self.command, "Executing command");

        let output = cmd
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Error::ProcessLaunch {
                command: self.command.clone(),
                source: e,
            })?;

        let output = CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        };

        if !output.success() {
            tracing::warn!(
                command = %self.command,
                exit_code = ?output.exit_code,
                "Command exited unsuccessfully"
            );
        }

        Ok(output)
    }

    /// Build the shell invocation.
    ///
    /// - Unix: `sh -c "{command}"`
    /// - Windows: `cmd /C "{command}"`
    fn shell_command(&self) -> process::Command {
        if let Some(shell) = &self.shell {
            let mut c = process::Command::new(shell);
            c.arg("-c").arg(&self.command);
            return c;
        }

        #[cfg(windows)]
        {
            let mut c = process::Command::new("cmd");
            c.args(["/C", self.command.as_str()]);
            c
        }
        #[cfg(not(windows))]
        {
            let mut c = process::Command::new("sh");
            c.arg("-c").arg(&self.command);
            c
        }
    }
}

impl From<&str> for Command {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
