//! Make sure the Tailwind CSS CLI binary and config file exist.

use std::fs;

use url::Url;

use crate::app::AppContext;
use crate::domain::{AppError, Config, DEFAULT_TAILWIND_CONFIG};
use crate::ports::{BinaryDownloader, ProcessRunner};

/// What provisioning changed on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionReport {
    /// Release URL fetched, if the binary was missing.
    pub downloaded_from: Option<Url>,
    /// Whether the default config file was written.
    pub config_created: bool,
}

/// Provision both the binary and the config file.
pub fn execute<D, P>(ctx: &AppContext<D, P>, config: &Config) -> Result<ProvisionReport, AppError>
where
    D: BinaryDownloader,
    P: ProcessRunner,
{
    let downloaded_from = ensure_cli(ctx, config)?;
    let config_created = ensure_config_file(config)?;
    Ok(ProvisionReport { downloaded_from, config_created })
}

/// Download the CLI binary unless it is already present.
pub fn ensure_cli<D, P>(ctx: &AppContext<D, P>, config: &Config) -> Result<Option<Url>, AppError>
where
    D: BinaryDownloader,
    P: ProcessRunner,
{
    let cli = config.full_cli_path();
    if is_installed(cli) {
        tracing::debug!(path = %cli.display(), "Tailwind CSS CLI already present");
        return Ok(None);
    }

    let url = config.download_url()?;
    println!("Tailwind CSS CLI not found.");
    println!("Downloading Tailwind CSS CLI from '{}'.", url);

    if let Some(parent) = cli.parent() {
        fs::create_dir_all(parent)?;
    }
    ctx.downloader().download(&url, cli)?;
    if let Err(err) = make_executable(cli) {
        let _ = fs::remove_file(cli);
        return Err(err);
    }

    println!("Downloaded Tailwind CSS CLI to '{}'.", cli.display());
    Ok(Some(url))
}

/// Write the default Tailwind config unless one exists.
pub fn ensure_config_file(config: &Config) -> Result<bool, AppError> {
    let path = config.full_config_file_path();
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_TAILWIND_CONFIG)?;
    println!("Created Tailwind CSS config at '{}'.", path.display());
    Ok(true)
}

/// A binary left without execute permission counts as missing.
#[cfg(unix)]
fn is_installed(path: &std::path::Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path).is_ok_and(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_installed(path: &std::path::Path) -> bool {
    path.is_file()
}

#[cfg(unix)]
fn make_executable(path: &std::path::Path) -> Result<(), AppError> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &std::path::Path) -> Result<(), AppError> {
    Ok(())
}
