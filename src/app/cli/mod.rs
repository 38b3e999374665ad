//! CLI Adapter.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::app::api::{self, RunserverOptions, ServerFlavor};
use crate::app::logging;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "tailwind-cli")]
#[command(version)]
#[command(
    about = "Provision the Tailwind CSS CLI and run build, watch, and dev-server workflows",
    long_about = None
)]
struct Cli {
    /// Settings file (defaults to ./tailwind.toml)
    #[arg(long, global = true, value_name = "PATH")]
    settings: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a minified production stylesheet
    #[clap(visible_alias = "b")]
    Build,
    /// Rebuild the stylesheet whenever templates or sources change
    #[clap(visible_alias = "w")]
    Watch,
    /// Start the development server with the watcher running alongside
    Runserver {
        /// Optional port number, or ipaddr:port
        addrport: Option<String>,
    },
    /// Start the extended development server with the watcher running alongside
    #[command(name = "runserver_plus", visible_alias = "runserver-plus")]
    RunserverPlus {
        /// Optional port number, or ipaddr:port
        addrport: Option<String>,
        /// SSL certificate file forwarded to the server
        #[arg(long, value_name = "FILE")]
        cert_file: Option<String>,
    },
    /// List template files of the project and its installed apps
    #[command(name = "list_templates", visible_alias = "list-templates")]
    ListTemplates,
}

/// Entry point for the CLI.
pub fn run() {
    logging::init();
    let cli = Cli::parse();
    let settings = cli.settings.as_deref();

    let result: Result<(), AppError> = match cli.command {
        Commands::Build => api::build(settings).map(|_| ()),
        Commands::Watch => api::watch(settings).map(|_| ()),
        Commands::Runserver { addrport } => {
            let options = RunserverOptions { addrport, cert_file: None };
            api::runserver(settings, ServerFlavor::Standard, &options).map(|_| ())
        }
        Commands::RunserverPlus { addrport, cert_file } => {
            let options = RunserverOptions { addrport, cert_file };
            api::runserver(settings, ServerFlavor::Plus, &options).map(|_| ())
        }
        Commands::ListTemplates => run_list_templates(settings),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_list_templates(settings: Option<&Path>) -> Result<(), AppError> {
    for template in api::list_templates(settings)? {
        println!("{}", template.display());
    }
    Ok(())
}
