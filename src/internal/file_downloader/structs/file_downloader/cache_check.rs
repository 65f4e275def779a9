//! 下载前的准备：建目录、本地缓存检查。

use std::path::Path;

use tokio::fs::DirBuilder;

use crate::internal::errors::DownloadError;
use crate::internal::file_downloader::structs::DownloadRequest;
use crate::internal::hooks::traits::HashValidator;

/// 递归创建目标文件的父目录。
pub(super) async fn create_parent_dirs(
    target: &Path,
    #[cfg_attr(not(unix), allow(unused_variables))] mode: u32,
) -> Result<(), DownloadError> {
    let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };

    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(mode);

    builder
        .create(parent)
        .await
        .map_err(DownloadError::CreateDir)
}

/// 目标文件已存在且通过校验时返回 `true`；任何失败都视为未命中。
pub(super) async fn satisfied_by_local_file(
    validator: &dyn HashValidator,
    target: &Path,
    request: &DownloadRequest,
) -> bool {
    match tokio::fs::metadata(target).await {
        Ok(meta) if meta.is_file() => {}
        _ => {
            tracing::debug!(path = %target.display(), "本地文件不存在");
            return false;
        }
    }

    match validator
        .validate(target, request.expected_hash(), &request.file_name)
        .await
    {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(path = %target.display(), error = %e, "本地文件未通过校验");
            false
        }
    }
}
