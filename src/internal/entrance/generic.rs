use tokio_util::sync::CancellationToken;

use crate::internal::errors::DownloadError;
use crate::internal::fetcher::Fetcher;
use crate::internal::hooks::impl_traits::ConsoleNotifier;
use crate::internal::hooks::traits::ProgressNotifier;

/// 本库主入口之一：把 URL 的响应体整体下载到内存，使用默认通知器。
pub async fn download(url: &str) -> Result<Vec<u8>, DownloadError> {
    download_with_context(&CancellationToken::new(), &ConsoleNotifier, url).await
}

/// 同 [`download`]，由调用方提供取消令牌与通知器。
pub async fn download_with_context(
    cancel: &CancellationToken,
    notifier: &dyn ProgressNotifier,
    url: &str,
) -> Result<Vec<u8>, DownloadError> {
    Fetcher::new().download(cancel, notifier, url).await
}
