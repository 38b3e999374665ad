mod binary_downloader;
mod process_runner;

pub use binary_downloader::BinaryDownloader;
pub use process_runner::{BackgroundProcess, ProcessOutcome, ProcessRunner};
