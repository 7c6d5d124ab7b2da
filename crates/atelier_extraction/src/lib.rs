//! Defensive recovery of structured payloads from generative model text.
//!
//! Models do not reliably honor output-format instructions. This crate
//! recovers a JSON object from whatever text came back (fenced blocks,
//! Python-style quoting, prose around an object, or bare prose) and then
//! checks it against the operation's [`Contract`].
//!
//! # Example
//!
//! ```
//! use atelier_extraction::{Contract, FieldSpec, FieldType, extract_validated};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Named {
//!     name: String,
//! }
//!
//! const NAME: Contract = Contract::new("clothing_name", &[
//!     FieldSpec::required("name", FieldType::String),
//! ]);
//!
//! let named: Named = extract_validated("```json\n{\"name\": \"红色丝绸裙\"}\n```", &NAME).unwrap();
//! assert_eq!(named.name, "红色丝绸裙");
//! ```

mod contract;
mod extractor;
mod strategy;
mod validator;

pub use contract::{Contract, FieldSpec, FieldType};
pub use extractor::{extract, extract_with};
pub use strategy::{
    STRATEGIES, Strategy, direct_parse, fenced_block, object_salvage, plain_string,
    quote_normalization,
};
pub use validator::{validate, validate_into};

use atelier_error::AtelierResult;
use serde::de::DeserializeOwned;

/// Extracts a payload from `raw` and validates it into `T`.
pub fn extract_validated<T: DeserializeOwned>(raw: &str, contract: &Contract) -> AtelierResult<T> {
    let payload = extract(raw, contract)?;
    Ok(validate_into(&payload, contract)?)
}
