pub mod config;
pub mod error;
pub mod invocation;
pub mod platform;
pub mod settings;

pub use config::Config;
pub use error::AppError;
pub use invocation::{DEFAULT_TAILWIND_CONFIG, Invocation};
pub use platform::Platform;
pub use settings::{ServerSettings, Settings};
