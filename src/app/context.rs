use crate::ports::{BinaryDownloader, ProcessRunner};

/// Application context holding dependencies for command execution.
pub struct AppContext<D: BinaryDownloader, P: ProcessRunner> {
    downloader: D,
    runner: P,
}

impl<D: BinaryDownloader, P: ProcessRunner> AppContext<D, P> {
    /// Create a new application context.
    pub fn new(downloader: D, runner: P) -> Self {
        Self { downloader, runner }
    }

    /// Get a reference to the release downloader.
    pub fn downloader(&self) -> &D {
        &self.downloader
    }

    /// Get a reference to the process runner.
    pub fn runner(&self) -> &P {
        &self.runner
    }
}
