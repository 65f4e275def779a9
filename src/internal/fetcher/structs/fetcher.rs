use reqwest::Client;
use tokio::io::AsyncWrite;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::internal::config::DownloaderConfig;
use crate::internal::errors::DownloadError;
use crate::internal::hooks::traits::ProgressNotifier;

use super::byte_stream::ByteStream;

/// 取数器：持有可复用的 HTTP 客户端与下载配置。
#[derive(Debug, Clone, Default)]
pub struct Fetcher {
    client: Client,
    config: DownloaderConfig,
}

impl Fetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用调用方提供的客户端（代理、超时等由调用方自行配置）。
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            config: DownloaderConfig::default(),
        }
    }

    pub fn with_config(mut self, config: DownloaderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &DownloaderConfig {
        &self.config
    }

    /// 发起一次 GET，返回位于响应体起始处的字节流。
    ///
    /// 令牌取消时中止请求并返回 [`DownloadError::Cancelled`]；不检查状态码，不重试。
    /// URL 无法解析或 reqwest 拒绝构造请求（如 `ftp://`）时返回 [`DownloadError::BuildRequest`]。
    pub async fn fetch(
        &self,
        cancel: &CancellationToken,
        url: &str,
    ) -> Result<ByteStream, DownloadError> {
        let url = Url::parse(url)?;
        tracing::debug!(%url, "发起 GET 请求");

        let resp = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(DownloadError::Cancelled),
            resp = self.client.get(url).send() => resp?,
        };

        tracing::debug!(status = %resp.status(), "收到响应");
        Ok(ByteStream::from_response(resp))
    }

    /// 下载到内存；发起请求前以 URL 作为名字调用通知器。
    pub async fn download(
        &self,
        cancel: &CancellationToken,
        notifier: &dyn ProgressNotifier,
        url: &str,
    ) -> Result<Vec<u8>, DownloadError> {
        if url.is_empty() {
            return Err(DownloadError::EmptyUrl);
        }

        notifier.on_start(url);

        self.fetch(cancel, url)
            .await?
            .read_all(cancel, self.config.effective_buffer_size())
            .await
    }

    /// 把响应体写入调用方提供的 `sink`，返回写入的字节数。
    pub async fn download_to<W>(
        &self,
        cancel: &CancellationToken,
        url: &str,
        sink: &mut W,
    ) -> Result<u64, DownloadError>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        if url.is_empty() {
            return Err(DownloadError::EmptyUrl);
        }

        let mut stream = self.fetch(cancel, url).await?;
        stream
            .copy_to(cancel, sink, self.config.effective_buffer_size(), None)
            .await
    }
}
