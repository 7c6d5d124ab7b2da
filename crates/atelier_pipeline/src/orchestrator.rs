//! Per-use-case sequencing of prompt, model, extraction and image stages.

use crate::contracts;
use atelier_core::{
    CatalogRequest, CatalogedItem, ClothingAttributes, ClothingName, ExplorableItem,
    ExploreItemsRequest, ExploreOutfitRequest, GenerateNameRequest, GenerateRequest,
    IdentifyAttributesRequest, IllustratedOutfit, IllustratedRecommendation, ImageRequest,
    InlineImage, Message, NameSource, NewOutfit, OutfitImageRequest, RecommendRequest,
    Recommendation,
};
use atelier_error::{AtelierResult, ConfigError, ValidationError};
use atelier_extraction::{Contract, extract_validated};
use atelier_models::{
    ChatClient, ChatDriver, HttpImageFetcher, ImageClient, ImageDriver, ImageFetcher,
    ImageResolver, ProviderConfig,
};
use atelier_prompt::{PromptRequest, render};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

/// Sampling temperature for explorable item generation.
pub const EXPLORE_TEMPERATURE: f32 = 0.7;

/// Token budget for explorable item generation when none is configured.
pub const DEFAULT_EXPLORE_MAX_TOKENS: u32 = 1500;

/// An orchestrator wired to the HTTP provider clients.
pub type HttpOrchestrator = Orchestrator<ChatClient, ImageClient, HttpImageFetcher>;

/// Runs each use case as a fresh linear sequence of stages.
///
/// Holds no state between calls. Every stage error propagates except a
/// failed name generation inside [`Orchestrator::catalog_item`], which falls
/// back to the caller's name.
#[derive(Debug, Clone)]
pub struct Orchestrator<C, I, F> {
    chat: C,
    images: I,
    resolver: ImageResolver<F>,
    explore_max_tokens: u32,
}

#[derive(Deserialize)]
struct ExploreItemsPayload {
    items: Vec<ExploreItemPayload>,
}

#[derive(Deserialize)]
struct ExploreItemPayload {
    name: String,
    description: String,
}

impl HttpOrchestrator {
    /// Builds the HTTP clients from `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an invalid configuration, before any
    /// network activity.
    pub fn from_config(config: ProviderConfig) -> Result<Self, ConfigError> {
        let explore_max_tokens = *config.explore_max_tokens();
        let chat = ChatClient::new(config.clone())?;
        let images = ImageClient::new(config)?;
        Ok(Orchestrator::new(chat, images, HttpImageFetcher::new())
            .with_explore_max_tokens(explore_max_tokens))
    }
}

impl<C, I, F> Orchestrator<C, I, F>
where
    C: ChatDriver,
    I: ImageDriver,
    F: ImageFetcher,
{
    /// Creates an orchestrator over the given drivers.
    pub fn new(chat: C, images: I, fetcher: F) -> Self {
        Self {
            chat,
            images,
            resolver: ImageResolver::new(fetcher),
            explore_max_tokens: DEFAULT_EXPLORE_MAX_TOKENS,
        }
    }

    /// Replaces the token budget for explorable item generation.
    pub fn with_explore_max_tokens(mut self, explore_max_tokens: u32) -> Self {
        self.explore_max_tokens = explore_max_tokens;
        self
    }

    /// Identifies garment attributes from a photo with the vision model.
    #[instrument(skip_all, fields(mime_type = %req.image.mime_type()))]
    pub async fn identify_attributes(
        &self,
        req: &IdentifyAttributesRequest,
    ) -> AtelierResult<ClothingAttributes> {
        let prompt = render(&PromptRequest::IdentifyAttributes);
        let message = Message::user_with_image(prompt, req.image.clone());

        let identified: ClothingAttributes = self
            .run_text_stage(GenerateRequest::from_messages(vec![message]), &contracts::ATTRIBUTES)
            .await?;

        if identified.attributes.is_empty() {
            return Err(ValidationError::field(
                contracts::ATTRIBUTES.name,
                "attributes",
                "must contain at least one entry",
            )
            .into());
        }

        info!(count = identified.attributes.len(), "Identified attributes");
        Ok(identified)
    }

    /// Generates a short display name from garment attributes.
    #[instrument(skip_all, fields(attributes = req.attributes.len()))]
    pub async fn generate_name(&self, req: &GenerateNameRequest) -> AtelierResult<ClothingName> {
        req.validate()?;

        let prompt = render(&PromptRequest::ClothingName {
            attributes: &req.attributes,
        });
        let named: ClothingName = self
            .run_text_stage(GenerateRequest::from_prompt(prompt), &contracts::CLOTHING_NAME)
            .await?;

        info!(name = %named.name, "Generated name");
        Ok(named)
    }

    /// Identifies attributes, then names the garment.
    ///
    /// Name generation is soft-failable: any failure is logged and the
    /// caller's fallback name is used instead.
    #[instrument(skip_all, fields(fallback_name = %req.fallback_name))]
    pub async fn catalog_item(&self, req: &CatalogRequest) -> AtelierResult<CatalogedItem> {
        req.validate()?;

        let identified = self
            .identify_attributes(&IdentifyAttributesRequest {
                image: req.image.clone(),
            })
            .await?;

        let naming = self
            .generate_name(&GenerateNameRequest {
                attributes: identified.attributes.clone(),
            })
            .await;
        let (name, name_source) = match naming {
            Ok(named) => (named.name, NameSource::Generated),
            Err(e) => {
                warn!(error = %e, "Name generation failed, using fallback name");
                (req.fallback_name.trim().to_string(), NameSource::Fallback)
            }
        };

        Ok(CatalogedItem {
            attributes: identified.attributes,
            name,
            name_source,
        })
    }

    /// Recommends an outfit from the user's closet.
    #[instrument(skip_all, fields(creativity = req.creativity_level))]
    pub async fn recommend_from_closet(
        &self,
        req: &RecommendRequest,
    ) -> AtelierResult<Recommendation> {
        let creativity = req.validate()?;

        let prompt = render(&PromptRequest::ClosetRecommendation {
            request: req,
            creativity,
        });
        let request = GenerateRequest::from_prompt(prompt).with_temperature(creativity.temperature());

        let recommendation: Recommendation = self
            .run_text_stage(request, &contracts::RECOMMENDATION)
            .await?;

        info!(
            has_caption = recommendation.image_caption().is_some(),
            "Recommended outfit from closet"
        );
        Ok(recommendation)
    }

    /// Recommends an outfit and, when the model gave a caption, renders it.
    #[instrument(skip_all)]
    pub async fn recommend_from_closet_with_image(
        &self,
        req: &RecommendRequest,
    ) -> AtelierResult<IllustratedRecommendation> {
        let recommendation = self.recommend_from_closet(req).await?;

        let image = match recommendation.image_caption() {
            Some(caption) => Some(
                self.generate_image(&OutfitImageRequest::garments_only(caption))
                    .await?,
            ),
            None => {
                debug!("No image caption, skipping image stage");
                None
            }
        };

        Ok(IllustratedRecommendation {
            recommendation,
            image,
        })
    }

    /// Generates a fresh list of explorable fashion items.
    #[instrument(skip_all, fields(count = ?req.count))]
    pub async fn explore_items(
        &self,
        req: &ExploreItemsRequest,
    ) -> AtelierResult<Vec<ExplorableItem>> {
        let count = req.validate()?;

        let prompt = render(&PromptRequest::ExploreItems { count });
        let request = GenerateRequest::from_prompt(prompt)
            .with_max_tokens(self.explore_max_tokens)
            .with_temperature(EXPLORE_TEMPERATURE);

        let payload: ExploreItemsPayload = self
            .run_text_stage(request, &contracts::EXPLORE_ITEMS)
            .await?;

        if payload.items.is_empty() {
            return Err(ValidationError::field(
                contracts::EXPLORE_ITEMS.name,
                "items",
                "must contain at least one entry",
            )
            .into());
        }

        let items: Vec<ExplorableItem> = payload
            .items
            .into_iter()
            .take(count as usize)
            .map(|item| ExplorableItem {
                id: uuid::Uuid::new_v4().to_string(),
                name: item.name,
                description: item.description,
            })
            .collect();

        info!(requested = count, generated = items.len(), "Generated explorable items");
        Ok(items)
    }

    /// Recommends a new outfit built around selected explorable items.
    #[instrument(skip_all, fields(creativity = req.creativity_level))]
    pub async fn recommend_from_exploration(
        &self,
        req: &ExploreOutfitRequest,
    ) -> AtelierResult<NewOutfit> {
        let creativity = req.validate()?;

        let prompt = render(&PromptRequest::ExplorationOutfit {
            request: req,
            creativity,
        });
        let request = GenerateRequest::from_prompt(prompt).with_temperature(creativity.temperature());

        let outfit: NewOutfit = self.run_text_stage(request, &contracts::NEW_OUTFIT).await?;

        info!("Recommended outfit from exploration");
        Ok(outfit)
    }

    /// Recommends a new outfit from explorable items and renders it.
    #[instrument(skip_all)]
    pub async fn recommend_from_exploration_with_image(
        &self,
        req: &ExploreOutfitRequest,
    ) -> AtelierResult<IllustratedOutfit> {
        let outfit = self.recommend_from_exploration(req).await?;
        let image = self
            .generate_image(&OutfitImageRequest::garments_only(
                outfit.image_prompt_details.clone(),
            ))
            .await?;
        Ok(IllustratedOutfit { outfit, image })
    }

    /// Renders an outfit description with the image model.
    ///
    /// Wearer descriptors appear in the caption only when the request
    /// carries a model persona.
    #[instrument(skip_all, fields(with_model = req.model_persona.is_some()))]
    pub async fn generate_image(&self, req: &OutfitImageRequest) -> AtelierResult<InlineImage> {
        req.validate()?;

        let prompt = render(&PromptRequest::OutfitImage {
            outfit_description: &req.outfit_description,
            model: req.model_persona.as_ref(),
        });

        debug!("Requesting image generation");
        let generation = self.images.generate(&ImageRequest::new(prompt)).await?;

        debug!(images = generation.images().len(), "Resolving generated image");
        let image = self.resolver.resolve(&generation).await?;

        info!(mime_type = %image.mime_type(), "Generated outfit image");
        Ok(image)
    }

    /// Completes `request`, then recovers and validates the payload.
    async fn run_text_stage<T: DeserializeOwned>(
        &self,
        request: GenerateRequest,
        contract: &Contract,
    ) -> AtelierResult<T> {
        debug!(stage = contract.name, "Invoking text model");
        let completion = self.chat.complete(&request).await?;

        debug!(
            stage = contract.name,
            len = completion.text().len(),
            finish_reason = ?completion.finish_reason(),
            "Extracting payload"
        );
        extract_validated(completion.text(), contract)
    }
}
