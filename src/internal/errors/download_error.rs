//! 下载相关错误类型。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("下载地址为空")]
    EmptyUrl,

    #[error("下载目录为空")]
    EmptyPath,

    #[error("下载文件名为空")]
    EmptyName,

    #[error("创建目录失败: {0}")]
    CreateDir(std::io::Error),

    /// URL 解析失败，或 reqwest 无法据此构造请求（如不支持的协议）。
    #[error("构造请求失败: {0}")]
    BuildRequest(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("HTTP 请求失败: {0}")]
    Request(reqwest::Error),

    #[error("下载被取消")]
    Cancelled,

    #[error("创建文件失败: {0}")]
    CreateFile(std::io::Error),

    #[error("读取响应流失败: {0}")]
    ReadStream(std::io::Error),

    #[error("写入文件失败: {0}")]
    WriteFile(std::io::Error),

    #[error("{name} 哈希不匹配: 期望 {expected:?}，实际 {actual}")]
    HashMismatch {
        name: String,
        expected: String,
        actual: String,
    },

    #[error("回读文件失败: {0}")]
    ReadBack(std::io::Error),
}

impl From<url::ParseError> for DownloadError {
    fn from(e: url::ParseError) -> Self {
        Self::BuildRequest(Box::new(e))
    }
}

impl From<reqwest::Error> for DownloadError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            Self::BuildRequest(Box::new(e))
        } else {
            Self::Request(e)
        }
    }
}

impl DownloadError {
    /// 请求参数不合法（url / 目录 / 文件名为空），此类错误发生时未做任何 I/O。
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::EmptyUrl | Self::EmptyPath | Self::EmptyName)
    }
}
