//! Applies the recovery strategies in order.

use crate::{Contract, STRATEGIES, Strategy};
use atelier_error::ExtractionError;
use serde_json::Value;

/// Recovers a payload from `raw` using the default strategy chain.
///
/// Returns an [`ExtractionError`] carrying the raw text only when every
/// strategy has declined.
pub fn extract(raw: &str, contract: &Contract) -> Result<Value, ExtractionError> {
    extract_with(STRATEGIES, raw, contract)
}

/// Recovers a payload using a caller-supplied strategy chain.
#[tracing::instrument(skip_all, fields(contract = contract.name, raw_len = raw.len()))]
pub fn extract_with(
    strategies: &[(&str, Strategy)],
    raw: &str,
    contract: &Contract,
) -> Result<Value, ExtractionError> {
    for (name, strategy) in strategies {
        match strategy(raw, contract) {
            Some(payload) => {
                tracing::debug!(strategy = name, "Recovered payload");
                return Ok(payload);
            }
            None => tracing::warn!(strategy = name, "Recovery strategy did not apply"),
        }
    }

    tracing::error!(raw = %raw, "No recovery strategy produced a payload");
    Err(ExtractionError::new(contract.name, contract.keys(), raw))
}
