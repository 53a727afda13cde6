use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{error::SttError, http_client::http_client};

use super::Transcriber;

const DEFAULT_GOOGLE_SPEECH_URL: &str = "https://speech.googleapis.com";

/// Google Cloud Speech-to-Text provider
///
/// Calls the synchronous `speech:recognize` REST endpoint with a fixed
/// recognition config (single-channel LINEAR16 PCM at the configured
/// sample rate and language).
pub(crate) struct GoogleSpeechProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
    language: String,
    sample_rate_hertz: u32,
}

impl GoogleSpeechProvider {
    pub fn new(api_key: SecretString, base_url: Option<Url>, language: String, sample_rate_hertz: u32) -> Self {
        let base_url = base_url.map_or_else(
            || DEFAULT_GOOGLE_SPEECH_URL.to_string(),
            |url| url.as_str().trim_end_matches('/').to_string(),
        );

        Self {
            client: http_client(),
            base_url,
            api_key,
            language,
            sample_rate_hertz,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognizeRequest<'a> {
    config: RecognitionConfig<'a>,
    audio: RecognitionAudio,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognitionConfig<'a> {
    encoding: &'static str,
    sample_rate_hertz: u32,
    language_code: &'a str,
}

#[derive(Serialize)]
struct RecognitionAudio {
    /// Base64-encoded audio bytes
    content: String,
}

#[derive(Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<RecognitionResult>,
}

#[derive(Deserialize)]
struct RecognitionResult {
    #[serde(default)]
    alternatives: Vec<RecognitionAlternative>,
}

#[derive(Deserialize)]
struct RecognitionAlternative {
    #[serde(default)]
    transcript: String,
}

/// Join the top alternative of each result with single spaces, in
/// provider-returned order
fn join_top_alternatives(response: &RecognizeResponse) -> String {
    response
        .results
        .iter()
        .filter_map(|result| result.alternatives.first())
        .map(|alternative| alternative.transcript.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[async_trait]
impl Transcriber for GoogleSpeechProvider {
    async fn transcribe(&self, audio: &[u8]) -> crate::error::Result<String> {
        let url = format!("{}/v1/speech:recognize", self.base_url);

        tracing::debug!("Google Speech request: {} bytes, language={}", audio.len(), self.language);

        let body = RecognizeRequest {
            config: RecognitionConfig {
                encoding: "LINEAR16",
                sample_rate_hertz: self.sample_rate_hertz,
                language_code: &self.language,
            },
            audio: RecognitionAudio {
                content: BASE64.encode(audio),
            },
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.expose_secret())])
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Google Speech request failed: {e}");
                SttError::ConnectionError(format!("failed to send request to Google Speech: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "unknown error".to_string());

            tracing::error!("Google Speech API error ({status}): {error_text}");

            return Err(match status.as_u16() {
                401 | 403 => SttError::AuthenticationFailed(error_text),
                400 => SttError::InvalidRequest(error_text),
                _ => SttError::ProviderApiError {
                    status: status.as_u16(),
                    message: error_text,
                },
            });
        }

        let result: RecognizeResponse = response.json().await.map_err(|e| {
            tracing::error!("failed to parse Google Speech response: {e}");
            SttError::MalformedResponse(e.to_string())
        })?;

        let transcript = join_top_alternatives(&result);

        tracing::debug!("transcription complete: {} chars", transcript.len());

        Ok(transcript)
    }

    fn name(&self) -> &str {
        "google"
    }
}
