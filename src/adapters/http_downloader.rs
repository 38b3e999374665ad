//! Release download implementation using reqwest.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use url::Url;

use crate::domain::AppError;
use crate::ports::BinaryDownloader;

const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// HTTP transport for release assets.
///
/// The body is streamed into a `.part` sibling and renamed into place once
/// complete, so an aborted transfer never looks like an installed binary.
#[derive(Debug, Clone)]
pub struct HttpBinaryDownloader {
    client: Client,
}

impl HttpBinaryDownloader {
    /// Create a downloader with the given overall request timeout.
    pub fn new(timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Download {
                url: String::new(),
                details: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }

    /// Create a downloader with the default timeout.
    pub fn with_default_timeout() -> Result<Self, AppError> {
        Self::new(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

impl BinaryDownloader for HttpBinaryDownloader {
    fn download(&self, url: &Url, destination: &Path) -> Result<(), AppError> {
        tracing::debug!(%url, destination = %destination.display(), "requesting release asset");

        let mut response = self.client.get(url.clone()).send().map_err(|e| AppError::Download {
            url: url.to_string(),
            details: format!("HTTP request failed: {}", e),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Download {
                url: url.to_string(),
                details: format!("server responded with status {}", status),
            });
        }

        let partial = partial_path(destination);
        if let Err(err) = write_body(&mut response, &partial, url) {
            let _ = fs::remove_file(&partial);
            return Err(err);
        }
        fs::rename(&partial, destination)?;
        Ok(())
    }
}

fn write_body(response: &mut Response, path: &Path, url: &Url) -> Result<(), AppError> {
    let mut file = File::create(path)?;
    let bytes = response.copy_to(&mut file).map_err(|e| AppError::Download {
        url: url.to_string(),
        details: format!("transfer interrupted: {}", e),
    })?;
    file.sync_all()?;
    tracing::debug!(bytes, path = %path.display(), "release asset written");
    Ok(())
}

fn partial_path(destination: &Path) -> PathBuf {
    let mut name = destination.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    destination.with_file_name(name)
}
