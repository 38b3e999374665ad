//! Diagnostic logging setup.
//!
//! User-facing status lines go to stdout with `println!`; `tracing` carries
//! the diagnostics (resolved paths, command lines) and is silent unless
//! `TAILWIND_CLI_LOG` asks for more, e.g. `TAILWIND_CLI_LOG=debug`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "TAILWIND_CLI_LOG";

/// Install the stderr subscriber. Calling it twice is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
