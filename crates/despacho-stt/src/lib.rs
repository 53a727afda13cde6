#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod http_client;
mod provider;

use std::sync::Arc;

pub use error::{Result, SttError};
pub use provider::Transcriber;
use provider::google::GoogleSpeechProvider;

use despacho_config::{SttConfig, SttProviderType};

/// Build the configured transcriber, if any
///
/// Returns `None` when no provider is configured; audio processing then
/// degrades to an empty transcript instead of failing outright.
///
/// # Errors
///
/// Returns an error if the configured provider is missing credentials
pub fn build_transcriber(config: &SttConfig) -> anyhow::Result<Option<Arc<dyn Transcriber>>> {
    let Some(provider_config) = &config.provider else {
        tracing::debug!("no STT provider configured");
        return Ok(None);
    };

    let transcriber: Arc<dyn Transcriber> = match provider_config.provider_type {
        SttProviderType::Google => {
            let api_key = provider_config
                .api_key
                .clone()
                .ok_or_else(|| anyhow::anyhow!("API key required for the Google STT provider"))?;

            Arc::new(GoogleSpeechProvider::new(
                api_key,
                provider_config.base_url.clone(),
                provider_config.language.clone(),
                provider_config.sample_rate_hertz,
            ))
        }
    };

    tracing::debug!(provider = transcriber.name(), "STT provider initialized");

    Ok(Some(transcriber))
}
