//! Tests for the HTTP image fetcher and resolver against a local server.

use atelier_core::{GeneratedImage, ImageGeneration};
use atelier_models::{HttpImageFetcher, ImageFetcher, ImageResolver};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serves one canned HTTP response and returns the request head it received.
async fn serve_once(
    status_line: &'static str,
    headers: &'static str,
    body: &'static [u8],
) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/image.png", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => head.extend_from_slice(&buf[..n]),
            }
        }

        let mut response = format!(
            "HTTP/1.1 {}\r\n{}Content-Length: {}\r\nConnection: close\r\n\r\n",
            status_line,
            headers,
            body.len()
        )
        .into_bytes();
        response.extend_from_slice(body);
        // The client may hang up without reading the body.
        let _ = socket.write_all(&response).await;
        let _ = socket.shutdown().await;
        String::from_utf8_lossy(&head).to_string()
    });

    (url, handle)
}

#[tokio::test]
async fn test_not_found_is_transient() {
    let (url, server) = serve_once("404 Not Found", "", b"missing").await;

    let err = HttpImageFetcher::new().fetch(&url).await.unwrap_err();
    assert!(err.is_transient());
    match err.kind() {
        atelier_error::AtelierErrorKind::Transient(e) => {
            assert_eq!(e.status, Some(404));
            assert_eq!(e.url.as_deref(), Some(url.as_str()));
        }
        other => panic!("unexpected error kind: {}", other),
    }
    server.await.unwrap();
}

#[tokio::test]
async fn test_fetch_sends_no_cache_and_reads_content_type() {
    let (url, server) =
        serve_once("200 OK", "Content-Type: image/jpeg\r\n", b"\xff\xd8\xff").await;

    let fetched = HttpImageFetcher::new().fetch(&url).await.unwrap();
    assert_eq!(fetched.bytes(), &vec![0xffu8, 0xd8, 0xff]);
    assert_eq!(fetched.content_type().as_deref(), Some("image/jpeg"));

    let head = server.await.unwrap().to_lowercase();
    assert!(head.starts_with("get /image.png"));
    assert!(head.contains("cache-control: no-cache"));
}

#[tokio::test]
async fn test_unreachable_host_is_transient() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/gone.png", listener.local_addr().unwrap());
    drop(listener);

    let err = HttpImageFetcher::new().fetch(&url).await.unwrap_err();
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_resolver_end_to_end_defaults_mime() {
    let (url, server) = serve_once("200 OK", "", b"PNGDATA").await;
    let generation = ImageGeneration::new(vec![GeneratedImage::new(Some(url))]);

    let image = ImageResolver::new(HttpImageFetcher::new())
        .resolve(&generation)
        .await
        .unwrap();
    assert_eq!(image.mime_type(), "image/png");
    assert_eq!(image.decode().unwrap(), b"PNGDATA".to_vec());
    server.await.unwrap();
}

#[tokio::test]
async fn test_resolver_propagates_404() {
    let (url, server) =
        serve_once("404 Not Found", "Content-Type: text/plain\r\n", b"nope").await;
    let generation = ImageGeneration::new(vec![GeneratedImage::new(Some(url))]);

    let err = ImageResolver::new(HttpImageFetcher::new())
        .resolve(&generation)
        .await
        .unwrap_err();
    assert!(err.is_transient());
    server.await.unwrap();
}
