//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together settings
//! loading, context creation and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{HttpBinaryDownloader, SystemProcessRunner};
use crate::app::{
    AppContext,
    commands::{build, list_templates, runserver, watch},
};
use crate::ports::ProcessOutcome;

pub use crate::app::commands::build::BuildOutcome;
pub use crate::app::commands::provision::ProvisionReport;
pub use crate::app::commands::runserver::{RunserverOptions, ServerFlavor};
pub use crate::app::commands::watch::WatchOutcome;
pub use crate::domain::{AppError, Config, Settings};

/// Create an `AppContext` backed by the network and real child processes.
fn create_context() -> Result<AppContext<HttpBinaryDownloader, SystemProcessRunner>, AppError> {
    Ok(AppContext::new(HttpBinaryDownloader::with_default_timeout()?, SystemProcessRunner::new()))
}

/// Load settings for a project rooted at `cwd`.
pub fn load_settings_at(cwd: &Path, settings_file: Option<&Path>) -> Result<Settings, AppError> {
    Settings::load(settings_file, cwd)
}

/// Resolve the configuration for a project rooted at `cwd`.
pub fn load_config_at(cwd: &Path, settings_file: Option<&Path>) -> Result<Config, AppError> {
    Config::from_settings(&load_settings_at(cwd, settings_file)?)
}

// =============================================================================
// Build / Watch API
// =============================================================================

/// Build the production stylesheet for the project in the current directory.
pub fn build(settings_file: Option<&Path>) -> Result<BuildOutcome, AppError> {
    build_at(std::env::current_dir()?, settings_file)
}

/// Build the production stylesheet for the project at `cwd`.
pub fn build_at(
    cwd: impl Into<PathBuf>,
    settings_file: Option<&Path>,
) -> Result<BuildOutcome, AppError> {
    let cwd: PathBuf = cwd.into();
    let config = load_config_at(&cwd, settings_file)?;
    let ctx = create_context()?;
    build::execute(&ctx, &config)
}

/// Watch and rebuild the stylesheet for the project in the current directory.
pub fn watch(settings_file: Option<&Path>) -> Result<WatchOutcome, AppError> {
    watch_at(std::env::current_dir()?, settings_file)
}

/// Watch and rebuild the stylesheet for the project at `cwd`.
pub fn watch_at(
    cwd: impl Into<PathBuf>,
    settings_file: Option<&Path>,
) -> Result<WatchOutcome, AppError> {
    let cwd: PathBuf = cwd.into();
    let config = load_config_at(&cwd, settings_file)?;
    let ctx = create_context()?;
    watch::execute(&ctx, &config)
}

// =============================================================================
// Development Server API
// =============================================================================

/// Run the configured development server with the watcher alongside.
pub fn runserver(
    settings_file: Option<&Path>,
    flavor: ServerFlavor,
    options: &RunserverOptions,
) -> Result<ProcessOutcome, AppError> {
    runserver_at(std::env::current_dir()?, settings_file, flavor, options)
}

/// Run the development server for the project at `cwd`.
pub fn runserver_at(
    cwd: impl Into<PathBuf>,
    settings_file: Option<&Path>,
    flavor: ServerFlavor,
    options: &RunserverOptions,
) -> Result<ProcessOutcome, AppError> {
    let cwd: PathBuf = cwd.into();
    let settings = load_settings_at(&cwd, settings_file)?;
    let config = Config::from_settings(&settings)?;
    let ctx = create_context()?;
    runserver::execute(&ctx, &config, &settings.server, flavor, options)
}

// =============================================================================
// Templates API
// =============================================================================

/// List template files for the project in the current directory.
pub fn list_templates(settings_file: Option<&Path>) -> Result<Vec<PathBuf>, AppError> {
    list_templates_at(std::env::current_dir()?, settings_file)
}

/// List template files for the project at `cwd`.
pub fn list_templates_at(
    cwd: impl Into<PathBuf>,
    settings_file: Option<&Path>,
) -> Result<Vec<PathBuf>, AppError> {
    let cwd: PathBuf = cwd.into();
    let settings = load_settings_at(&cwd, settings_file)?;
    list_templates::execute(&settings)
}
