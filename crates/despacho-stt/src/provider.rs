pub(crate) mod google;

use async_trait::async_trait;

/// Trait for speech-to-text provider implementations
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe audio bytes to a single plain-text transcript
    async fn transcribe(&self, audio: &[u8]) -> crate::error::Result<String>;

    /// Get the provider name
    fn name(&self) -> &str;
}
