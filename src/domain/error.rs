use std::io;

use thiserror::Error;

/// Library-wide error type for tailwind-cli operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Settings do not describe a usable project layout.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A single settings value could not be interpreted.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// Settings file is not valid TOML or has unknown keys.
    #[error("Failed to parse settings file {path}: {details}")]
    SettingsParse { path: String, details: String },

    /// Fetching the Tailwind CSS CLI binary failed.
    #[error("Failed to download Tailwind CSS CLI from '{url}': {details}")]
    Download { url: String, details: String },

    /// External tool execution failed.
    #[error("{tool} failed: {error}")]
    ExternalToolError { tool: String, error: String },

    /// An optional integration is not available.
    #[error("Missing dependencies. {0}")]
    MissingDependencies(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers matching on failure classes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidSetting { .. }
            | AppError::SettingsParse { .. } => io::ErrorKind::InvalidInput,
            AppError::MissingDependencies(_) => io::ErrorKind::NotFound,
            AppError::Download { .. } | AppError::ExternalToolError { .. } => io::ErrorKind::Other,
        }
    }
}
