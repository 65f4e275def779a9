//! 取数器测试：内存下载、写入 sink、状态码透传、错误分类与取消。

use std::io;
use std::net::TcpListener;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use httpmock::prelude::*;

use crate::CancellationToken;
use crate::config::DownloaderConfig;
use crate::errors::DownloadError;
use crate::fetcher::Fetcher;
use crate::tests::{
    AfterWrite, CountingNotifier, init_tracing, partial_response, random_body, serve, serve_raw,
};

/// 每次写入都失败的 sink。
struct BrokenSink;

impl tokio::io::AsyncWrite for BrokenSink {
    fn poll_write(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        _buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        Poll::Ready(Err(io::Error::other("disk full")))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}

#[tokio::test]
async fn download_reads_whole_body_and_notifies_with_url() {
    init_tracing();
    let body = random_body(2 * 1024 * 1024 + 3);
    let server = MockServer::start_async().await;
    let mock = serve(&server, "/blob.bin", &body).await;
    let url = server.url("/blob.bin");
    let notifier = CountingNotifier::default();

    let bytes = Fetcher::new()
        .download(&CancellationToken::new(), &notifier, &url)
        .await
        .unwrap();

    assert_eq!(bytes, body);
    assert_eq!(notifier.names(), vec![url]);
    assert_eq!(mock.hits_async().await, 1);
}

#[tokio::test]
async fn download_rejects_empty_url_before_notifying() {
    let notifier = CountingNotifier::default();

    let err = Fetcher::new()
        .download(&CancellationToken::new(), &notifier, "")
        .await
        .unwrap_err();

    assert!(matches!(err, DownloadError::EmptyUrl));
    assert_eq!(notifier.count(), 0);
}

#[tokio::test]
async fn download_to_streams_into_sink() {
    let body = random_body(64 * 1024);
    let server = MockServer::start_async().await;
    let _mock = serve(&server, "/blob.bin", &body).await;
    let mut sink: Vec<u8> = Vec::new();

    let written = Fetcher::new()
        .download_to(&CancellationToken::new(), &server.url("/blob.bin"), &mut sink)
        .await
        .unwrap();

    assert_eq!(written, body.len() as u64);
    assert_eq!(sink, body);
}

#[tokio::test]
async fn fetch_exposes_status_without_failing() {
    let server = MockServer::start_async().await;
    let _mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/gone");
            then.status(410).body("gone");
        })
        .await;
    let cancel = CancellationToken::new();

    let stream = Fetcher::new()
        .fetch(&cancel, &server.url("/gone"))
        .await
        .unwrap();

    assert_eq!(stream.status().as_u16(), 410);
    assert_eq!(stream.read_all(&cancel, 1024).await.unwrap(), b"gone");
}

#[tokio::test]
async fn read_chunk_signals_end_with_zero() {
    let server = MockServer::start_async().await;
    let _mock = serve(&server, "/short", b"0123456789").await;
    let cancel = CancellationToken::new();
    let mut stream = Fetcher::new()
        .fetch(&cancel, &server.url("/short"))
        .await
        .unwrap();

    let mut buf = [0u8; 4];
    let mut collected = Vec::new();
    loop {
        let n = stream.read_chunk(&cancel, &mut buf).await.unwrap();
        if n == 0 {
            break;
        }
        assert!(n <= buf.len());
        collected.extend_from_slice(&buf[..n]);
    }

    assert_eq!(collected, b"0123456789");
}

#[tokio::test]
async fn malformed_url_is_a_build_error() {
    let err = Fetcher::new()
        .fetch(&CancellationToken::new(), "::not a url::")
        .await
        .unwrap_err();

    assert!(matches!(err, DownloadError::BuildRequest(_)));
}

#[tokio::test]
async fn refused_connection_is_a_request_error() {
    // 先占用端口再释放，得到一个大概率无人监听的地址
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let err = Fetcher::new()
        .fetch(&CancellationToken::new(), &format!("http://127.0.0.1:{port}/"))
        .await
        .unwrap_err();

    assert!(matches!(err, DownloadError::Request(_)), "{err}");
}

#[tokio::test]
async fn cancelled_token_stops_fetch() {
    let server = MockServer::start_async().await;
    let mock = serve(&server, "/blob.bin", b"abc").await;
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = Fetcher::new()
        .fetch(&cancel, &server.url("/blob.bin"))
        .await
        .unwrap_err();

    assert!(matches!(err, DownloadError::Cancelled));
    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn download_to_reports_sink_failure() {
    let server = MockServer::start_async().await;
    let _mock = serve(&server, "/blob.bin", b"abc").await;

    let err = Fetcher::new()
        .download_to(&CancellationToken::new(), &server.url("/blob.bin"), &mut BrokenSink)
        .await
        .unwrap_err();

    assert!(matches!(err, DownloadError::WriteFile(_)), "{err}");
}

#[tokio::test]
async fn download_to_keeps_bytes_before_truncation() {
    let url = serve_raw(partial_response(100_000, b"partial-body"), AfterWrite::Close).await;
    let mut sink: Vec<u8> = Vec::new();

    let err = tokio::time::timeout(
        Duration::from_secs(5),
        Fetcher::new().download_to(&CancellationToken::new(), &url, &mut sink),
    )
    .await
    .expect("断流后应及时返回")
    .unwrap_err();

    assert!(matches!(err, DownloadError::ReadStream(_)), "{err}");
    assert_eq!(sink, b"partial-body");
}

#[tokio::test]
async fn download_honours_configured_buffer_size() {
    let body = random_body(5_000);
    let server = MockServer::start_async().await;
    let _mock = serve(&server, "/blob.bin", &body).await;

    let bytes = Fetcher::new()
        .with_config(DownloaderConfig {
            buffer_size: 13,
            ..Default::default()
        })
        .download(&CancellationToken::new(), &CountingNotifier::default(), &server.url("/blob.bin"))
        .await
        .unwrap();

    assert_eq!(bytes, body);
}

#[tokio::test]
async fn unsupported_scheme_is_a_build_error() {
    let err = Fetcher::new()
        .fetch(&CancellationToken::new(), "ftp://127.0.0.1/file")
        .await
        .unwrap_err();

    assert!(matches!(err, DownloadError::BuildRequest(_)), "{err}");
}
