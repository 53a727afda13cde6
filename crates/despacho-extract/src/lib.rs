#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod parse;
mod prompt;
mod provider;

use std::sync::Arc;

pub use error::{ExtractError, Result};
pub use parse::parse_order_record;
pub use provider::Extractor;
use provider::openai::OpenAiProvider;

use despacho_config::{LlmConfig, LlmProviderType};

/// Discriminator value carried by records the extractor could not parse
pub const ERROR_KIND: &str = "error";

/// Field holding the record discriminator (`orden` / `ingreso` /
/// `desconocido` / `error`)
pub const KIND_FIELD: &str = "tipo";

/// Build the configured extractor, if any
///
/// # Errors
///
/// Returns an error if the configured provider is missing credentials
pub fn build_extractor(config: &LlmConfig) -> anyhow::Result<Option<Arc<dyn Extractor>>> {
    let Some(provider_config) = &config.provider else {
        tracing::debug!("no LLM provider configured");
        return Ok(None);
    };

    let extractor: Arc<dyn Extractor> = match provider_config.provider_type {
        LlmProviderType::Openai => {
            let api_key = provider_config
                .api_key
                .clone()
                .ok_or_else(|| anyhow::anyhow!("API key required for the LLM provider"))?;

            Arc::new(OpenAiProvider::new(
                api_key,
                provider_config.base_url.clone(),
                provider_config.model.clone(),
            ))
        }
    };

    tracing::debug!(provider = extractor.name(), "LLM provider initialized");

    Ok(Some(extractor))
}
