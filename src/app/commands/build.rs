//! One-shot production build of the stylesheet.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::app::commands::{provision, tool_failure};
use crate::domain::{AppError, Config, Invocation};
use crate::ports::{BinaryDownloader, ProcessOutcome, ProcessRunner};

/// Result of a build run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// Stylesheet written to the given path.
    Built(PathBuf),
    /// The user interrupted the build.
    Canceled,
}

/// Execute the build command.
pub fn execute<D, P>(ctx: &AppContext<D, P>, config: &Config) -> Result<BuildOutcome, AppError>
where
    D: BinaryDownloader,
    P: ProcessRunner,
{
    provision::execute(ctx, config)?;

    let invocation = Invocation::tailwind_build(config);
    match ctx.runner().run(&invocation)? {
        ProcessOutcome::Success => {
            let dist = config.full_dist_css_path();
            println!("Built production stylesheet '{}'.", dist.display());
            Ok(BuildOutcome::Built(dist))
        }
        ProcessOutcome::Interrupted => {
            println!("Canceled building production stylesheet.");
            Ok(BuildOutcome::Canceled)
        }
        ProcessOutcome::Failed(code) => Err(tool_failure("build", code)),
    }
}
