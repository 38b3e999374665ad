use std::path::{Path, PathBuf};

use crate::domain::{AppError, Invocation};

/// How a foreground process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Exited with status 0.
    Success,
    /// Stopped by the user with Ctrl+C.
    Interrupted,
    /// Exited unsuccessfully; `None` when killed by a signal.
    Failed(Option<i32>),
}

/// A child process left running while the foreground command executes.
pub trait BackgroundProcess {
    /// Terminate the process if still running and reap it.
    fn stop(&mut self) -> Result<(), AppError>;
}

/// Port for launching external programs.
pub trait ProcessRunner {
    /// Run to completion, inheriting stdio.
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutcome, AppError>;

    /// Start in the background, inheriting stdio.
    fn spawn(&self, invocation: &Invocation) -> Result<Box<dyn BackgroundProcess>, AppError>;

    /// Locate a program by name, or by a path relative to `cwd`.
    fn locate(&self, program: &str, cwd: &Path) -> Option<PathBuf>;
}
