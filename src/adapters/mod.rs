pub mod http_downloader;
pub mod system_process;

pub use http_downloader::HttpBinaryDownloader;
pub use system_process::{SystemBackgroundProcess, SystemProcessRunner};
