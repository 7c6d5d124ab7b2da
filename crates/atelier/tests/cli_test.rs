//! Command-line parsing and handler tests.

use async_trait::async_trait;
use atelier::cli::{Cli, Commands, LogFormatArg, mime_for_path, run};
use atelier_core::{
    GenerateRequest, GeneratedImage, ImageGeneration, ImageRequest, TextCompletion,
};
use atelier_error::AtelierResult;
use atelier_models::{ChatDriver, FetchedImage, ImageDriver, ImageFetcher};
use atelier_pipeline::Orchestrator;
use clap::Parser;
use std::path::Path;

struct FixedChat(&'static str);

#[async_trait]
impl ChatDriver for FixedChat {
    async fn complete(&self, _request: &GenerateRequest) -> AtelierResult<TextCompletion> {
        Ok(TextCompletion::new(self.0, Some("stop".to_string())))
    }
}

struct FixedImages;

#[async_trait]
impl ImageDriver for FixedImages {
    async fn generate(&self, _request: &ImageRequest) -> AtelierResult<ImageGeneration> {
        Ok(ImageGeneration::new(vec![GeneratedImage::new(Some(
            "https://images.test/outfit.png".to_string(),
        ))]))
    }
}

struct FixedFetcher;

#[async_trait]
impl ImageFetcher for FixedFetcher {
    async fn fetch(&self, _url: &str) -> AtelierResult<FetchedImage> {
        Ok(FetchedImage::new(vec![1, 2, 3, 4], Some("image/png".to_string())))
    }
}

#[test]
fn test_recommend_parses_repeated_items_and_persona() {
    let cli = Cli::try_parse_from([
        "atelier",
        "recommend",
        "--mood",
        "开心",
        "--weather",
        "晴朗",
        "--item",
        "白色衬衫",
        "--item",
        "牛仔裤",
        "--gender",
        "女",
        "--age",
        "28",
        "--with-image",
    ])
    .unwrap();

    let Commands::Recommend {
        items,
        creativity,
        persona,
        with_image,
        ..
    } = cli.command
    else {
        panic!("expected recommend");
    };
    assert_eq!(items, vec!["白色衬衫", "牛仔裤"]);
    assert_eq!(creativity, 5);
    assert!(with_image);

    let persona = persona.to_persona();
    assert_eq!(persona.gender_text(), Some("女"));
    assert_eq!(*persona.age(), Some(28));
    assert!(persona.weight_kg().is_none());
}

#[test]
fn test_global_flags_accepted_after_subcommand() {
    let cli = Cli::try_parse_from([
        "atelier",
        "image",
        "红色连衣裙",
        "--log-format",
        "json",
        "--output",
        "out.png",
    ])
    .unwrap();
    assert_eq!(cli.log_format, LogFormatArg::Json);
    assert_eq!(cli.output.as_deref(), Some(Path::new("out.png")));
}

#[test]
fn test_name_requires_attributes() {
    assert!(Cli::try_parse_from(["atelier", "name"]).is_err());
}

#[test]
fn test_explore_items_defaults_count() {
    let cli = Cli::try_parse_from(["atelier", "explore-items"]).unwrap();
    assert!(matches!(cli.command, Commands::ExploreItems { count: 10 }));
}

#[test]
fn test_mime_guessed_from_extension() {
    assert_eq!(mime_for_path(Path::new("shirt.JPG")), "image/jpeg");
    assert_eq!(mime_for_path(Path::new("shirt.webp")), "image/webp");
    assert_eq!(mime_for_path(Path::new("shirt")), "image/png");
}

#[tokio::test]
async fn test_image_command_writes_decoded_bytes() {
    let orchestrator = Orchestrator::new(FixedChat("{}"), FixedImages, FixedFetcher);
    let cli = Cli::try_parse_from(["atelier", "image", "白色衬衫搭配牛仔裤"]).unwrap();
    let path = std::env::temp_dir().join(format!("atelier-cli-{}.png", std::process::id()));

    run(&orchestrator, cli.command, Some(&path)).await.unwrap();

    let written = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(written, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_catalog_propagates_identification_failure() {
    let orchestrator = Orchestrator::new(FixedChat("{}"), FixedImages, FixedFetcher);
    let path = std::env::temp_dir().join(format!("atelier-catalog-{}.jpg", std::process::id()));
    std::fs::write(&path, [0xffu8, 0xd8, 0xff]).unwrap();

    let cli = Cli::try_parse_from(["atelier", "catalog", path.to_str().unwrap()]).unwrap();
    let result = run(&orchestrator, cli.command, None).await;
    std::fs::remove_file(&path).ok();

    let err = result.unwrap_err();
    let atelier_err = err.downcast_ref::<atelier_error::AtelierError>().unwrap();
    assert!(atelier_err.is_validation());
}

#[test]
fn test_image_model_flags_build_persona() {
    let cli = Cli::try_parse_from(["atelier", "image", "长裙", "--gender", "女", "--height-cm", "165"])
        .unwrap();
    let Commands::Image { model, .. } = cli.command else {
        panic!("expected image");
    };
    let persona = model.to_persona();
    assert!(!persona.is_empty());
    assert_eq!(*persona.height_cm(), Some(165));
}
