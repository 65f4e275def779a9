use std::path::{Path, PathBuf};

use crate::internal::errors::DownloadError;

/// 单次文件下载请求，每次调用构造一次，用完即弃。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    /// 目标目录
    pub directory: PathBuf,
    /// 目录下的文件名，也用于通知与错误信息
    pub file_name: String,
    /// 期望的十六进制哈希，忽略大小写；`None` 与空字符串等价，永远不匹配
    pub expected_hash: Option<String>,
}

impl DownloadRequest {
    pub fn new(
        url: impl Into<String>,
        directory: impl AsRef<Path>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            directory: directory.as_ref().to_path_buf(),
            file_name: file_name.into(),
            expected_hash: None,
        }
    }

    /// 设置期望哈希
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.expected_hash = Some(hash.into());
        self
    }

    /// 依次检查 url、目录、文件名，返回第一个为空的字段对应的错误。
    pub fn validate(&self) -> Result<(), DownloadError> {
        if self.url.is_empty() {
            return Err(DownloadError::EmptyUrl);
        }
        if self.directory.as_os_str().is_empty() {
            return Err(DownloadError::EmptyPath);
        }
        if self.file_name.is_empty() {
            return Err(DownloadError::EmptyName);
        }
        Ok(())
    }

    pub fn target_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    pub(crate) fn expected_hash(&self) -> &str {
        self.expected_hash.as_deref().unwrap_or_default()
    }
}
