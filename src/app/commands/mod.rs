pub mod build;
pub mod list_templates;
pub mod provision;
pub mod runserver;
pub mod watch;

use crate::domain::AppError;

const TAILWIND_TOOL: &str = "Tailwind CSS CLI";

/// Error for a Tailwind CSS CLI run that ended unsuccessfully.
pub(crate) fn tool_failure(action: &str, code: Option<i32>) -> AppError {
    let status = match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by a signal".to_string(),
    };
    AppError::ExternalToolError {
        tool: TAILWIND_TOOL.to_string(),
        error: format!("{} exited with {}", action, status),
    }
}
