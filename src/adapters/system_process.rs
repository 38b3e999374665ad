//! Child process execution with Ctrl+C treated as cancellation.

use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus};
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::{AppError, Invocation};
use crate::ports::{BackgroundProcess, ProcessOutcome, ProcessRunner};

/// Set by the Ctrl+C handler; cleared before each foreground run.
static INTERRUPTED: AtomicBool = AtomicBool::new(false);
static HANDLER_INSTALLED: OnceLock<bool> = OnceLock::new();

/// Exit code shells report for a process ended by SIGINT.
const SIGINT_EXIT_CODE: i32 = 130;

/// Runs programs as direct children of this process.
///
/// Ctrl+C reaches the whole foreground process group, so the child stops on
/// its own while this process survives to report the cancellation.
#[derive(Debug, Clone, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutcome, AppError> {
        install_interrupt_handler();
        INTERRUPTED.store(false, Ordering::SeqCst);

        tracing::debug!(
            command = ?invocation.command_line(),
            cwd = %invocation.cwd().display(),
            "running"
        );
        let status = command_for(invocation).status().map_err(|e| tool_error(invocation, e))?;

        let outcome = classify(status, INTERRUPTED.load(Ordering::SeqCst));
        tracing::debug!(?outcome, %status, "process finished");
        Ok(outcome)
    }

    fn spawn(&self, invocation: &Invocation) -> Result<Box<dyn BackgroundProcess>, AppError> {
        install_interrupt_handler();

        tracing::debug!(command = ?invocation.command_line(), "spawning background process");
        let child = command_for(invocation).spawn().map_err(|e| tool_error(invocation, e))?;
        Ok(Box::new(SystemBackgroundProcess {
            child,
            name: invocation.program().to_string_lossy().into_owned(),
        }))
    }

    fn locate(&self, program: &str, cwd: &Path) -> Option<PathBuf> {
        which::which_in(program, std::env::var_os("PATH"), cwd).ok()
    }
}

/// Background child that is terminated when stopped or dropped.
#[derive(Debug)]
pub struct SystemBackgroundProcess {
    child: Child,
    name: String,
}

impl BackgroundProcess for SystemBackgroundProcess {
    fn stop(&mut self) -> Result<(), AppError> {
        if self.child.try_wait()?.is_some() {
            return Ok(());
        }
        tracing::debug!(name = %self.name, pid = self.child.id(), "terminating background process");
        if let Err(err) = self.child.kill() {
            // Already exited between try_wait and kill.
            if err.kind() != std::io::ErrorKind::InvalidInput {
                return Err(err.into());
            }
        }
        self.child.wait()?;
        Ok(())
    }
}

impl Drop for SystemBackgroundProcess {
    fn drop(&mut self) {
        if let Err(err) = self.stop() {
            tracing::warn!(name = %self.name, "failed to stop background process: {}", err);
        }
    }
}

fn install_interrupt_handler() {
    HANDLER_INSTALLED.get_or_init(|| {
        match ctrlc::set_handler(|| INTERRUPTED.store(true, Ordering::SeqCst)) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("failed to install Ctrl+C handler: {}", err);
                false
            }
        }
    });
}

fn command_for(invocation: &Invocation) -> Command {
    let mut command = Command::new(invocation.program());
    command.args(invocation.args()).current_dir(invocation.cwd());
    command
}

fn tool_error(invocation: &Invocation, err: std::io::Error) -> AppError {
    AppError::ExternalToolError {
        tool: invocation.program().to_string_lossy().into_owned(),
        error: err.to_string(),
    }
}

fn classify(status: ExitStatus, interrupted: bool) -> ProcessOutcome {
    if interrupted || killed_by_sigint(&status) || status.code() == Some(SIGINT_EXIT_CODE) {
        return ProcessOutcome::Interrupted;
    }
    if status.success() { ProcessOutcome::Success } else { ProcessOutcome::Failed(status.code()) }
}

#[cfg(unix)]
fn killed_by_sigint(status: &ExitStatus) -> bool {
    use std::os::unix::process::ExitStatusExt;
    status.signal() == Some(2)
}

#[cfg(not(unix))]
fn killed_by_sigint(_status: &ExitStatus) -> bool {
    false
}
