//! 文件下载入口：每个函数都构造一次默认配置，不依赖任何全局状态。
//!
//! 参数顺序统一为 `url, [hash,] file_name, directory`。

use std::path::Path;

use tokio_util::sync::CancellationToken;

use crate::internal::errors::DownloadError;
use crate::internal::file_downloader::structs::{
    DownloadOptions, DownloadRequest, FileDownloader,
};

/// 下载到 `{directory}/{file_name}`，不校验哈希。
pub async fn download_file(
    url: &str,
    file_name: &str,
    directory: impl AsRef<Path>,
) -> Result<(), DownloadError> {
    let request = DownloadRequest::new(url, directory, file_name);
    download_file_with_context(&CancellationToken::new(), &DownloadOptions::unchecked(), &request)
        .await
}

/// 下载并用 SHA-256 校验；本地文件已匹配时不会发起请求。
pub async fn download_file_validated(
    url: &str,
    file_hash: &str,
    file_name: &str,
    directory: impl AsRef<Path>,
) -> Result<(), DownloadError> {
    let request = DownloadRequest::new(url, directory, file_name).with_hash(file_hash);
    download_file_with_context(&CancellationToken::new(), &DownloadOptions::default(), &request)
        .await
}

/// 同 [`download_file`]，成功后返回文件内容。
pub async fn download_file_bytes(
    url: &str,
    file_name: &str,
    directory: impl AsRef<Path>,
) -> Result<Vec<u8>, DownloadError> {
    let request = DownloadRequest::new(url, directory, file_name);
    download_file_with_context_bytes(
        &CancellationToken::new(),
        &DownloadOptions::unchecked(),
        &request,
    )
    .await
}

/// 同 [`download_file_validated`]，成功后返回文件内容。
pub async fn download_file_bytes_validated(
    url: &str,
    file_hash: &str,
    file_name: &str,
    directory: impl AsRef<Path>,
) -> Result<Vec<u8>, DownloadError> {
    let request = DownloadRequest::new(url, directory, file_name).with_hash(file_hash);
    download_file_with_context_bytes(
        &CancellationToken::new(),
        &DownloadOptions::default(),
        &request,
    )
    .await
}

/// 完整入口：由调用方提供取消令牌、通知器与校验方式。
pub async fn download_file_with_context(
    cancel: &CancellationToken,
    options: &DownloadOptions,
    request: &DownloadRequest,
) -> Result<(), DownloadError> {
    FileDownloader::new().run(cancel, request, options).await
}

pub async fn download_file_with_context_bytes(
    cancel: &CancellationToken,
    options: &DownloadOptions,
    request: &DownloadRequest,
) -> Result<Vec<u8>, DownloadError> {
    FileDownloader::new().run_bytes(cancel, request, options).await
}
