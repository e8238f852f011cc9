//! Foreground process hosting

use async_trait::async_trait;
use romrun_errors::{Error, ProcessError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Full command line ready to spawn
///
/// The program is the located absolute executable path; arguments are the
/// already-substituted template tail, ROM path included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandSpec {
    /// Create a new command spec
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Add an argument to the command
    #[must_use]
    pub fn arg<S: AsRef<str>>(mut self, arg: S) -> Self {
        self.args.push(arg.as_ref().to_string());
        self
    }

    /// Add multiple arguments to the command
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in args {
            self.args.push(arg.as_ref().to_string());
        }
        self
    }

    /// Get the program path
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Get the arguments
    #[must_use]
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// The whole command line as display strings, program first
    #[must_use]
    pub fn to_line(&self) -> Vec<String> {
        let mut line = Vec::with_capacity(self.args.len() + 1);
        line.push(self.program.display().to_string());
        line.extend(self.args.iter().cloned());
        line
    }
}

/// Terminal status of a hosted child process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildExit {
    /// Exit code, `None` when the child was terminated by a signal
    pub code: Option<i32>,
}

impl ChildExit {
    /// Exit with a specific code
    #[must_use]
    pub const fn with_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Termination by signal, before the child could exit
    #[must_use]
    pub const fn signaled() -> Self {
        Self { code: None }
    }

    /// Whether the child exited cleanly with code 0
    #[must_use]
    pub const fn success(self) -> bool {
        matches!(self.code, Some(0))
    }
}

impl From<std::process::ExitStatus> for ChildExit {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// Trait for hosting foreground child processes
///
/// Implementations spawn the command and wait for its termination with no
/// timeout; emulator sessions are open-ended and end by user action.
#[async_trait]
pub trait ProcessHost: Send + Sync {
    /// Spawn the command and wait until it terminates
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::SpawnFailed` when the child cannot be started
    /// and `ProcessError::WaitFailed` when the wait itself fails.
    async fn run_to_exit(&self, spec: &CommandSpec) -> Result<ChildExit, Error>;
}

/// Process host backed by the real operating system
///
/// The child inherits stdio, so interactive emulators own the terminal and
/// display for as long as they run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl SystemHost {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProcessHost for SystemHost {
    async fn run_to_exit(&self, spec: &CommandSpec) -> Result<ChildExit, Error> {
        let mut child = Command::new(spec.program())
            .args(spec.get_args())
            .spawn()
            .map_err(|e| ProcessError::SpawnFailed {
                command: spec.program().display().to_string(),
                message: e.to_string(),
            })?;

        let status = child
            .wait()
            .await
            .map_err(|e| ProcessError::WaitFailed {
                command: spec.program().display().to_string(),
                message: e.to_string(),
            })?;

        Ok(ChildExit::from(status))
    }
}
