//! Development server with the stylesheet watcher running alongside.

use crate::app::AppContext;
use crate::app::commands::provision;
use crate::domain::{AppError, Config, Invocation, ServerSettings};
use crate::ports::{BinaryDownloader, ProcessOutcome, ProcessRunner};

/// Which configured server command to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerFlavor {
    /// `[server] command`.
    Standard,
    /// `[server] plus_command`, an optional integration.
    Plus,
}

impl ServerFlavor {
    fn subcommand(self) -> &'static str {
        match self {
            ServerFlavor::Standard => "runserver",
            ServerFlavor::Plus => "runserver_plus",
        }
    }
}

/// Arguments forwarded to the server command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunserverOptions {
    /// Optional `host:port` or port.
    pub addrport: Option<String>,
    /// TLS certificate file (`runserver_plus` only).
    pub cert_file: Option<String>,
}

/// Execute `runserver` or `runserver_plus`.
///
/// The watcher is stopped once the server exits, however it exits.
pub fn execute<D, P>(
    ctx: &AppContext<D, P>,
    config: &Config,
    server: &ServerSettings,
    flavor: ServerFlavor,
    options: &RunserverOptions,
) -> Result<ProcessOutcome, AppError>
where
    D: BinaryDownloader,
    P: ProcessRunner,
{
    let server_invocation = server_invocation(ctx, config, server, flavor, options)?;
    provision::execute(ctx, config)?;

    let mut watcher = ctx.runner().spawn(&Invocation::tailwind_watch(config))?;
    let result = ctx.runner().run(&server_invocation);
    let stopped = watcher.stop();

    let outcome = result?;
    stopped?;

    match outcome {
        ProcessOutcome::Failed(code) => Err(AppError::ExternalToolError {
            tool: flavor.subcommand().to_string(),
            error: match code {
                Some(code) => format!("server exited with exit code {}", code),
                None => "server terminated by a signal".to_string(),
            },
        }),
        other => Ok(other),
    }
}

/// Resolve the server command line, checking optional integrations first.
pub fn server_invocation<D, P>(
    ctx: &AppContext<D, P>,
    config: &Config,
    server: &ServerSettings,
    flavor: ServerFlavor,
    options: &RunserverOptions,
) -> Result<Invocation, AppError>
where
    D: BinaryDownloader,
    P: ProcessRunner,
{
    let command = match flavor {
        ServerFlavor::Standard => Some(server.command.as_slice()),
        ServerFlavor::Plus => server.plus_command.as_deref(),
    };

    let (program, rest) = match (flavor, command) {
        (_, Some([program, rest @ ..])) => (program, rest),
        (ServerFlavor::Standard, _) => {
            return Err(AppError::config_error("[server] command must not be empty"));
        }
        (ServerFlavor::Plus, _) => {
            return Err(AppError::MissingDependencies(
                "Set [server] plus_command to an extended development server to use runserver_plus."
                    .to_string(),
            ));
        }
    };

    let located = ctx.runner().locate(program, config.base_dir());
    let program = match (flavor, located) {
        (_, Some(path)) => path.into_os_string(),
        (ServerFlavor::Standard, None) => program.into(),
        (ServerFlavor::Plus, None) => {
            return Err(AppError::MissingDependencies(format!(
                "'{}' was not found; install it to use runserver_plus.",
                program
            )));
        }
    };

    let mut args = rest.to_vec();
    if let Some(addrport) = &options.addrport {
        args.push(addrport.clone());
    }
    if let (ServerFlavor::Plus, Some(cert_file)) = (flavor, &options.cert_file) {
        args.push("--cert-file".to_string());
        args.push(cert_file.clone());
    }

    Ok(Invocation::new(program, args, config.base_dir()))
}
