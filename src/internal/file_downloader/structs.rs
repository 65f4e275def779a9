pub mod download_options;
pub mod download_request;
pub mod file_downloader;

pub use download_options::{DownloadOptions, HashCheck};
pub use download_request::DownloadRequest;
pub use file_downloader::FileDownloader;
