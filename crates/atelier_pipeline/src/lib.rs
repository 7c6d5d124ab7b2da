//! Use-case orchestration for Atelier.
//!
//! Each public method on [`Orchestrator`] validates its input, builds a
//! prompt, calls the model through a driver trait, and recovers a validated
//! result from the reply. Image-producing use cases chain an image
//! generation stage on a field of that result.
//!
//! # Example
//!
//! ```no_run
//! use atelier_core::{Persona, RecommendRequest};
//! use atelier_models::ProviderConfig;
//! use atelier_pipeline::HttpOrchestrator;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let orchestrator = HttpOrchestrator::from_config(ProviderConfig::from_env()?)?;
//! let recommendation = orchestrator
//!     .recommend_from_closet(&RecommendRequest {
//!         mood: "开心".into(),
//!         weather: "晴朗".into(),
//!         closet_items: vec!["T恤".into(), "牛仔裤".into()],
//!         persona: Persona::default(),
//!         creativity_level: 5,
//!     })
//!     .await?;
//! println!("{}", recommendation.recommended_outfit);
//! # Ok(())
//! # }
//! ```

pub mod contracts;
mod orchestrator;

pub use orchestrator::{
    DEFAULT_EXPLORE_MAX_TOKENS, EXPLORE_TEMPERATURE, HttpOrchestrator, Orchestrator,
};
