use std::path::Path;
use std::time::Instant;

use serde_json::Value;

use despacho_core::HttpError as _;

use crate::envelope::{assemble, error_envelope};
use crate::error::ApiError;
use crate::state::AppState;

/// Run the audio pipeline: read scratch bytes, transcribe, extract,
/// assemble the envelope
///
/// Provider failures resolve into an error-shaped 200 envelope; only a
/// failure to read the stored upload is an internal error.
pub(crate) async fn process_audio_file(state: &AppState, audio_path: &Path, started: Instant) -> Result<Value, ApiError> {
    let audio = tokio::fs::read(audio_path)
        .await
        .map_err(|e| ApiError::internal(format!("failed to read stored upload: {e}")))?;

    // Transcription failures collapse into an empty transcript, so a
    // provider outage reads the same as silent audio downstream
    let transcript = match &state.transcriber {
        None => {
            tracing::warn!("no STT provider configured, treating audio as silent");
            String::new()
        }
        Some(transcriber) => transcriber.transcribe(&audio).await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "transcription failed");
            String::new()
        }),
    };

    if transcript.trim().is_empty() {
        return Ok(error_envelope(Some(""), "no speech recognized in audio", started));
    }

    tracing::info!(chars = transcript.len(), "transcription complete");

    let Some(extractor) = &state.extractor else {
        return Ok(error_envelope(Some(&transcript), "LLM provider is not configured", started));
    };

    let record = match extractor.extract(&transcript).await {
        Ok(record) => record,
        Err(e) => return Ok(error_envelope(Some(&transcript), &e.client_message(), started)),
    };

    Ok(assemble(&transcript, record, &*state.tickets, started))
}
