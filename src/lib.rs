//! tailwind-cli: provision the Tailwind CSS standalone CLI and drive build,
//! watch, and development-server workflows for a web project.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{
    BuildOutcome, ProvisionReport, RunserverOptions, ServerFlavor, WatchOutcome, build, build_at,
    list_templates, list_templates_at, load_config_at, load_settings_at, runserver, runserver_at,
    watch, watch_at,
};
pub use domain::{AppError, Config, DEFAULT_TAILWIND_CONFIG, Invocation, Platform, Settings};
pub use ports::ProcessOutcome;
