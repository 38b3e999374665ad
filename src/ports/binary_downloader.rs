use std::path::Path;

use url::Url;

use crate::domain::AppError;

/// Port for fetching a release asset to a local file.
pub trait BinaryDownloader {
    /// Download `url` into `destination`, replacing any existing file.
    ///
    /// On failure no file is left at `destination`.
    fn download(&self, url: &Url, destination: &Path) -> Result<(), AppError>;
}
