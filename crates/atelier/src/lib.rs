//! Outfit recommendations and illustrations from generative models.
//!
//! This facade re-exports the Atelier workspace:
//!
//! - [`atelier_core`]: request, result and message types
//! - [`atelier_error`]: the error taxonomy
//! - [`atelier_prompt`]: prompt construction
//! - [`atelier_extraction`]: payload recovery and validation
//! - [`atelier_models`]: provider clients and image resolution
//! - [`atelier_pipeline`]: the per-use-case orchestrator
//!
//! The `atelier` binary exposes every use case on the command line.

pub mod cli;

pub use atelier_core::*;
pub use atelier_error::*;
pub use atelier_extraction::{Contract, FieldSpec, FieldType, extract, extract_validated, validate};
pub use atelier_models::{
    ChatClient, ChatDriver, FetchedImage, HttpImageFetcher, ImageClient, ImageDriver,
    ImageFetcher, ImageResolver, ProviderConfig, ProviderConfigBuilder,
};
pub use atelier_pipeline::{HttpOrchestrator, Orchestrator};
pub use atelier_prompt::{PromptRequest, render};
