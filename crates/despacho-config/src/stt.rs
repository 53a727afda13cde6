use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Top-level speech-to-text configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SttConfig {
    /// Provider to transcribe audio with; transcription degrades to an
    /// empty transcript when absent
    #[serde(default)]
    pub provider: Option<SttProviderConfig>,
}

/// Configuration for the speech-to-text provider
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SttProviderConfig {
    /// Provider type
    #[serde(rename = "type")]
    pub provider_type: SttProviderType,
    /// API key
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Recognition language (BCP-47)
    #[serde(default = "default_language")]
    pub language: String,
    /// Expected sample rate of uploaded audio
    #[serde(default = "default_sample_rate_hertz")]
    pub sample_rate_hertz: u32,
}

/// Supported speech-to-text providers
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SttProviderType {
    /// Google Cloud Speech-to-Text
    Google,
}

fn default_language() -> String {
    "es-ES".to_string()
}

const fn default_sample_rate_hertz() -> u32 {
    16_000
}
