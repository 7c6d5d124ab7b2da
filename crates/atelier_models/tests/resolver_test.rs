//! Tests for image resolution with a recording fetcher.

use async_trait::async_trait;
use atelier_core::{GeneratedImage, ImageGeneration};
use atelier_error::{AtelierErrorKind, AtelierResult};
use atelier_models::{FetchedImage, ImageFetcher, ImageResolver};
use std::sync::Mutex;

/// Records requested URLs and replays a fixed reply.
struct RecordingFetcher {
    reply: FetchedImage,
    requested: Mutex<Vec<String>>,
}

impl RecordingFetcher {
    fn new(content_type: Option<&str>) -> Self {
        Self {
            reply: FetchedImage::new(vec![1, 2, 3, 4], content_type.map(str::to_string)),
            requested: Mutex::new(Vec::new()),
        }
    }

    fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl<'a> ImageFetcher for &'a RecordingFetcher {
    async fn fetch(&self, url: &str) -> AtelierResult<FetchedImage> {
        self.requested.lock().unwrap().push(url.to_string());
        Ok(self.reply.clone())
    }
}

#[tokio::test]
async fn test_missing_url_never_fetches() {
    let fetcher = RecordingFetcher::new(Some("image/png"));
    let resolver = ImageResolver::new(&fetcher);

    for generation in [
        ImageGeneration::new(vec![]),
        ImageGeneration::new(vec![GeneratedImage::new(None)]),
        ImageGeneration::new(vec![GeneratedImage::new(Some("  ".into()))]),
    ] {
        let err = resolver.resolve(&generation).await.unwrap_err();
        match err.kind() {
            AtelierErrorKind::MalformedResponse(e) => assert_eq!(e.field, "images[0].url"),
            other => panic!("unexpected error kind: {}", other),
        }
    }
    assert!(fetcher.requested().is_empty());
}

#[tokio::test]
async fn test_first_image_is_used() {
    let fetcher = RecordingFetcher::new(Some("image/webp; charset=binary"));
    let generation = ImageGeneration::new(vec![
        GeneratedImage::new(Some("https://img/first.webp".into())),
        GeneratedImage::new(Some("https://img/second.webp".into())),
    ]);

    let image = ImageResolver::new(&fetcher).resolve(&generation).await.unwrap();
    assert_eq!(image.mime_type(), "image/webp");
    assert_eq!(image.encoded_bytes(), "AQIDBA==");
    assert_eq!(fetcher.requested(), vec!["https://img/first.webp".to_string()]);
}

#[tokio::test]
async fn test_missing_content_type_defaults_to_png() {
    let fetcher = RecordingFetcher::new(None);
    let generation = ImageGeneration::new(vec![GeneratedImage::new(Some("https://img/x".into()))]);

    let image = ImageResolver::new(&fetcher).resolve(&generation).await.unwrap();
    assert_eq!(image.mime_type(), "image/png");
}
