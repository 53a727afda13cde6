//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;
use std::path::Path;

use despacho_config::{
    Config, LlmConfig, LlmProviderConfig, LlmProviderType, ServerConfig, SttConfig, SttProviderConfig,
    SttProviderType, UploadConfig,
};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults and no providers
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    ..ServerConfig::default()
                },
                upload: UploadConfig::default(),
                stt: SttConfig::default(),
                llm: LlmConfig::default(),
            },
        }
    }

    /// Point the LLM provider at a mock OpenAI-compatible backend
    pub fn with_llm(mut self, base_url: &str) -> Self {
        self.config.llm.provider = Some(LlmProviderConfig {
            provider_type: LlmProviderType::Openai,
            api_key: Some(SecretString::from("test-key")),
            base_url: Some(base_url.parse().expect("valid URL")),
            model: "mock-model".to_owned(),
        });
        self
    }

    /// Point the speech provider at a mock recognition backend
    pub fn with_speech(mut self, base_url: &str) -> Self {
        self.config.stt.provider = Some(SttProviderConfig {
            provider_type: SttProviderType::Google,
            api_key: Some(SecretString::from("test-key")),
            base_url: Some(base_url.parse().expect("valid URL")),
            language: "es-ES".to_owned(),
            sample_rate_hertz: 16_000,
        });
        self
    }

    /// Write accepted uploads under the given directory
    pub fn with_scratch_dir(mut self, dir: &Path) -> Self {
        self.config.upload.scratch_dir = dir.to_path_buf();
        self
    }

    /// Lower the upload size ceiling
    pub fn with_max_upload_bytes(mut self, bytes: u64) -> Self {
        self.config.upload.max_bytes = bytes;
        self
    }

    /// Shorten the per-request wall-clock budget
    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.config.server.request_timeout_secs = secs;
        self
    }

    /// Disable the health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
