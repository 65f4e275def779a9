//! 响应体字节流：按固定大小分块读取，每次读取与写入都会与取消令牌竞争。

use std::io;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::{Stream, TryStreamExt};
use sha2::{Digest, Sha256};
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio_util::io::StreamReader;
use tokio_util::sync::CancellationToken;

use crate::internal::errors::DownloadError;

type BodyStream = Pin<Box<dyn Stream<Item = io::Result<Bytes>> + Send>>;

/// 已打开的响应体，位于 body 起始处；drop 时释放底层连接。
pub struct ByteStream {
    status: reqwest::StatusCode,
    reader: StreamReader<BodyStream, Bytes>,
}

impl std::fmt::Debug for ByteStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteStream")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl ByteStream {
    pub(crate) fn from_response(resp: reqwest::Response) -> Self {
        let status = resp.status();
        let body: BodyStream =
            Box::pin(resp.bytes_stream().map_err(io::Error::other));

        Self {
            status,
            reader: StreamReader::new(body),
        }
    }

    /// 响应状态码。下载流程本身不检查它，非 2xx 的响应体同样会被当作内容。
    pub fn status(&self) -> reqwest::StatusCode {
        self.status
    }

    /// 读取一块数据，最多 `buf.len()` 字节；返回 0 表示数据已读完。
    pub async fn read_chunk(
        &mut self,
        cancel: &CancellationToken,
        buf: &mut [u8],
    ) -> Result<usize, DownloadError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(DownloadError::Cancelled),
            read = self.reader.read(buf) => read.map_err(DownloadError::ReadStream),
        }
    }

    /// 读完整个响应体到内存，每次最多读取 `buffer_size` 字节。
    pub async fn read_all(
        mut self,
        cancel: &CancellationToken,
        buffer_size: usize,
    ) -> Result<Vec<u8>, DownloadError> {
        let mut out = Vec::new();
        self.copy_to(cancel, &mut out, buffer_size, None).await?;
        Ok(out)
    }

    /// 把剩余响应体写入 `sink`，可选地同时喂给哈希累加器；返回写入的字节数。
    ///
    /// 出错时已写入的部分不会回滚；读流失败时会先把已写入的部分刷到 `sink`。
    pub async fn copy_to<W>(
        &mut self,
        cancel: &CancellationToken,
        sink: &mut W,
        buffer_size: usize,
        mut hasher: Option<&mut Sha256>,
    ) -> Result<u64, DownloadError>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let mut buf = vec![0u8; buffer_size.max(1)];
        let mut written: u64 = 0;

        loop {
            let n = match self.read_chunk(cancel, &mut buf).await {
                Ok(n) => n,
                Err(e @ DownloadError::ReadStream(_)) => {
                    let _ = sink.flush().await;
                    return Err(e);
                }
                Err(e) => return Err(e),
            };
            if n == 0 {
                break;
            }

            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(DownloadError::Cancelled),
                res = sink.write_all(&buf[..n]) => res.map_err(DownloadError::WriteFile)?,
            }

            if let Some(h) = hasher.as_deref_mut() {
                h.update(&buf[..n]);
            }

            written += n as u64;
            tracing::trace!(chunk = n, written, "写入数据块");
        }

        sink.flush().await.map_err(DownloadError::WriteFile)?;
        Ok(written)
    }
}
