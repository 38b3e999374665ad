//! Continuous rebuild while templates and sources change.

use crate::app::AppContext;
use crate::app::commands::{provision, tool_failure};
use crate::domain::{AppError, Config, Invocation};
use crate::ports::{BinaryDownloader, ProcessOutcome, ProcessRunner};

/// Result of a watch session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchOutcome {
    /// The CLI exited on its own.
    Finished,
    /// The user stopped watching.
    Stopped,
}

/// Execute the watch command.
pub fn execute<D, P>(ctx: &AppContext<D, P>, config: &Config) -> Result<WatchOutcome, AppError>
where
    D: BinaryDownloader,
    P: ProcessRunner,
{
    provision::execute(ctx, config)?;

    let invocation = Invocation::tailwind_watch(config);
    match ctx.runner().run(&invocation)? {
        ProcessOutcome::Success => Ok(WatchOutcome::Finished),
        ProcessOutcome::Interrupted => {
            println!("Stopped watching for changes.");
            Ok(WatchOutcome::Stopped)
        }
        ProcessOutcome::Failed(code) => Err(tool_failure("watch", code)),
    }
}
