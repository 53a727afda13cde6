//! OpenAI-compatible chat-completions provider
//!
//! The default base URL points at the Google Generative Language
//! OpenAI-compat surface, matching the Gemini deployment this service
//! was built for; any OpenAI-compatible endpoint works.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::error::ExtractError;
use crate::parse::parse_order_record;
use crate::prompt::build_prompt;

use super::Extractor;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

pub(crate) struct OpenAiProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
    model: String,
}

impl OpenAiProvider {
    pub fn new(api_key: SecretString, base_url: Option<Url>, model: String) -> Self {
        let base_url = base_url.map_or_else(
            || DEFAULT_BASE_URL.to_string(),
            |url| url.as_str().trim_end_matches('/').to_string(),
        );

        Self {
            client: Client::new(),
            base_url,
            api_key,
            model,
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl Extractor for OpenAiProvider {
    async fn extract(&self, text: &str) -> crate::error::Result<Value> {
        let prompt = build_prompt(text);

        let wire_request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
        };

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(model = %self.model, error = %e, "LLM request failed");
                ExtractError::Upstream(e.to_string())
            })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(model = %self.model, status = %status, "LLM provider returned error");

            return Err(match status.as_u16() {
                401 | 403 => ExtractError::AuthenticationFailed(body),
                400 => ExtractError::InvalidRequest(body),
                _ => ExtractError::Upstream(format!("provider returned {status}: {body}")),
            });
        }

        let wire_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| ExtractError::Upstream(format!("failed to parse response: {e}")))?;

        let content = wire_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ExtractError::EmptyCompletion("response carried no message content".to_string()))?;

        Ok(parse_order_record(content.trim()))
    }

    fn name(&self) -> &str {
        "openai"
    }
}
