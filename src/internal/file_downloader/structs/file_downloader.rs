//! 带哈希校验的文件下载器
//!
//! 单次调用按固定顺序执行：
//!
//! 1. 校验请求参数（url / 目录 / 文件名不能为空），此时不做任何 I/O
//! 2. 拼出目标路径并递归创建父目录（unix 下权限 `0o700`）
//! 3. 提供了校验器时先检查本地文件，校验通过直接返回，不发请求、不通知
//! 4. 调用通知器的 `on_start`
//! 5. 通过 [`Fetcher`] 发起 GET
//! 6. 创建（或截断）目标文件
//! 7. 按块读取响应体，写文件的同时更新 SHA-256
//! 8. 提供了校验器时比对哈希，不匹配返回 [`DownloadError::HashMismatch`]，已写入的文件保留
//!
//! 出错时不清理已写入的部分文件，下次调用的缓存检查会重新校验它。
//! 同一路径的并发下载不做互斥，最后写入者生效。

mod cache_check;

use std::path::Path;

use sha2::{Digest, Sha256};
use tokio::fs::File;
use tokio_util::sync::CancellationToken;

use crate::internal::config::DownloaderConfig;
use crate::internal::errors::DownloadError;
use crate::internal::fetcher::Fetcher;
use crate::internal::hooks::impl_traits::impl_validator::hash_matches;
use crate::internal::hooks::traits::{HashValidator, ProgressNotifier};

use super::download_options::DownloadOptions;
use super::download_request::DownloadRequest;
use cache_check::{create_parent_dirs, satisfied_by_local_file};

/// 带校验的文件下载器；内部只持有 [`Fetcher`]，可跨任务克隆共享。
#[derive(Debug, Clone, Default)]
pub struct FileDownloader {
    fetcher: Fetcher,
}

impl FileDownloader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fetcher(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    fn config(&self) -> &DownloaderConfig {
        self.fetcher.config()
    }

    /// 下载文件到 `{directory}/{file_name}`。
    ///
    /// `validator` 为 `None` 时既不检查本地缓存，也不比对下载后的哈希。
    pub async fn download_file(
        &self,
        cancel: &CancellationToken,
        request: &DownloadRequest,
        notifier: &dyn ProgressNotifier,
        validator: Option<&dyn HashValidator>,
    ) -> Result<(), DownloadError> {
        request.validate()?;

        let target = request.target_path();
        create_parent_dirs(&target, self.config().dir_mode).await?;

        if let Some(validator) = validator {
            if satisfied_by_local_file(validator, &target, request).await {
                tracing::debug!(path = %target.display(), "本地文件校验通过，跳过下载");
                return Ok(());
            }
        }

        notifier.on_start(&request.file_name);

        let mut stream = self.fetcher.fetch(cancel, &request.url).await?;
        let mut file = File::create(&target)
            .await
            .map_err(DownloadError::CreateFile)?;

        let mut hasher = validator.map(|_| Sha256::new());
        let written = stream
            .copy_to(
                cancel,
                &mut file,
                self.config().effective_buffer_size(),
                hasher.as_mut(),
            )
            .await?;

        tracing::debug!(path = %target.display(), written, "写入完成");

        let Some(hasher) = hasher else {
            return Ok(());
        };

        let actual = hex::encode(hasher.finalize());
        let expected = request.expected_hash();
        if !hash_matches(expected, &actual) {
            tracing::debug!(name = %request.file_name, expected, %actual, "哈希不匹配");
            return Err(DownloadError::HashMismatch {
                name: request.file_name.clone(),
                expected: expected.to_string(),
                actual,
            });
        }

        Ok(())
    }

    /// 同 [`FileDownloader::download_file`]，成功后把目标文件整体读回内存。
    pub async fn download_file_bytes(
        &self,
        cancel: &CancellationToken,
        request: &DownloadRequest,
        notifier: &dyn ProgressNotifier,
        validator: Option<&dyn HashValidator>,
    ) -> Result<Vec<u8>, DownloadError> {
        self.download_file(cancel, request, notifier, validator)
            .await?;
        read_back(&request.target_path()).await
    }

    /// 按 [`DownloadOptions`] 中的通知器与校验方式执行下载。
    pub async fn run(
        &self,
        cancel: &CancellationToken,
        request: &DownloadRequest,
        options: &DownloadOptions,
    ) -> Result<(), DownloadError> {
        self.download_file(
            cancel,
            request,
            options.notifier.as_ref(),
            options.hash_check.validator(),
        )
        .await
    }

    pub async fn run_bytes(
        &self,
        cancel: &CancellationToken,
        request: &DownloadRequest,
        options: &DownloadOptions,
    ) -> Result<Vec<u8>, DownloadError> {
        self.run(cancel, request, options).await?;
        read_back(&request.target_path()).await
    }
}

async fn read_back(path: &Path) -> Result<Vec<u8>, DownloadError> {
    tokio::fs::read(path).await.map_err(DownloadError::ReadBack)
}
