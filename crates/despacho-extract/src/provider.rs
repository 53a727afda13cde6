pub(crate) mod openai;

use async_trait::async_trait;
use serde_json::Value;

/// Trait for LLM-backed order extraction
///
/// An `Err` means the provider call itself failed. Malformed model
/// output is returned as an `Ok` record with `tipo:"error"`.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extract a structured order record from free text
    async fn extract(&self, text: &str) -> crate::error::Result<Value>;

    /// Get the provider name
    fn name(&self) -> &str;
}
