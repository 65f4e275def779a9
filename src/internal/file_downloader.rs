//! 带校验的文件下载：本地缓存检查 → 按需下载 → 边写边算哈希 → 比对。
//!
//! 使用方式：`FileDownloader::new().download_file(&cancel, &request, &notifier, Some(&Sha256Validator)).await`
//! 对外导出以 [`crate::file_downloader`] 为准。

pub mod structs;
