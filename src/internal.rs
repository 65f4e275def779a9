pub mod config;
pub mod entrance;
pub mod errors;
pub mod fetcher;
pub mod file_downloader;
pub mod hooks;
