//! 错误类型：下载流程错误与哈希校验错误分开定义，校验错误只在缓存检查阶段被吞掉。

pub mod download_error;
pub mod validation_error;

pub use download_error::DownloadError;
pub use validation_error::ValidationError;
