//! Command handlers.

use crate::cli::Commands;
use anyhow::Context;
use atelier_core::{
    CatalogRequest, ExploreItemsRequest, ExploreOutfitRequest, GenerateNameRequest,
    IdentifyAttributesRequest, InlineImage, OutfitImageRequest, RecommendRequest,
};
use atelier_models::{ChatDriver, ImageDriver, ImageFetcher, ProviderConfig};
use atelier_pipeline::Orchestrator;
use serde::Serialize;
use std::path::Path;

/// Loads provider configuration from `path`, or from the environment when
/// no file is given.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<ProviderConfig> {
    let config = match path {
        Some(path) => ProviderConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ProviderConfig::from_env().context("Failed to load configuration from environment")?,
    };
    Ok(config)
}

/// Guesses an image MIME type from a file extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("heic") => "image/heic",
        _ => atelier_core::DEFAULT_IMAGE_MIME,
    }
}

/// Reads a photo from disk as an inline image.
pub fn read_image(path: &Path) -> anyhow::Result<InlineImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read image {}", path.display()))?;
    Ok(InlineImage::from_bytes(mime_for_path(path), &bytes))
}

/// Runs one command, printing its result to stdout as pretty JSON.
#[tracing::instrument(skip_all)]
pub async fn run<C, I, F>(
    orchestrator: &Orchestrator<C, I, F>,
    command: Commands,
    output: Option<&Path>,
) -> anyhow::Result<()>
where
    C: ChatDriver,
    I: ImageDriver,
    F: ImageFetcher,
{
    match command {
        Commands::Identify { image } => {
            let request = IdentifyAttributesRequest {
                image: read_image(&image)?,
            };
            print_json(&orchestrator.identify_attributes(&request).await?)
        }
        Commands::Name { attributes } => {
            let request = GenerateNameRequest { attributes };
            print_json(&orchestrator.generate_name(&request).await?)
        }
        Commands::Catalog {
            image,
            fallback_name,
        } => {
            let fallback_name = fallback_name.unwrap_or_else(|| file_stem(&image));
            let request = CatalogRequest {
                image: read_image(&image)?,
                fallback_name,
            };
            print_json(&orchestrator.catalog_item(&request).await?)
        }
        Commands::Recommend {
            mood,
            weather,
            items,
            creativity,
            persona,
            with_image,
        } => {
            let request = RecommendRequest {
                mood,
                weather,
                closet_items: items,
                persona: persona.to_persona(),
                creativity_level: creativity,
            };
            if with_image {
                let illustrated = orchestrator.recommend_from_closet_with_image(&request).await?;
                match (&illustrated.image, output) {
                    (Some(image), Some(path)) => write_image(image, path)?,
                    (None, Some(_)) => tracing::warn!("No image caption, nothing written"),
                    _ => {}
                }
                print_json(&illustrated)
            } else {
                print_json(&orchestrator.recommend_from_closet(&request).await?)
            }
        }
        Commands::ExploreItems { count } => {
            let request = ExploreItemsRequest { count: Some(count) };
            print_json(&orchestrator.explore_items(&request).await?)
        }
        Commands::Explore {
            items,
            mood,
            weather,
            creativity,
            persona,
            with_image,
        } => {
            let request = ExploreOutfitRequest {
                selected_items: items,
                mood,
                weather,
                persona: persona.to_persona(),
                creativity_level: creativity,
            };
            if with_image {
                let illustrated = orchestrator
                    .recommend_from_exploration_with_image(&request)
                    .await?;
                if let Some(path) = output {
                    write_image(&illustrated.image, path)?;
                }
                print_json(&illustrated)
            } else {
                print_json(&orchestrator.recommend_from_exploration(&request).await?)
            }
        }
        Commands::Image { description, model } => {
            let model_persona = model.to_persona();
            let request = OutfitImageRequest {
                outfit_description: description,
                model_persona: (!model_persona.is_empty()).then_some(model_persona),
            };
            let image = orchestrator.generate_image(&request).await?;
            if let Some(path) = output {
                write_image(&image, path)?;
            }
            print_json(&image)
        }
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn write_image(image: &InlineImage, path: &Path) -> anyhow::Result<()> {
    let bytes = image.decode()?;
    std::fs::write(path, &bytes)
        .with_context(|| format!("Failed to write image to {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "Wrote image");
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
