use std::time::Instant;

use axum::Json;
use axum::extract::{Multipart, State};
use http::HeaderMap;
use serde::Deserialize;
use serde_json::Value;

use crate::envelope::assemble;
use crate::error::ApiError;
use crate::pipeline;
use crate::state::AppState;
use crate::upload::ScratchFile;

/// Multipart field names accepted for the uploaded recording
const AUDIO_FIELDS: [&str; 2] = ["audio_file", "file"];

#[derive(Debug, Deserialize)]
pub(crate) struct ProcessTextRequest {
    text: String,
}

/// Handle `POST /process-text`: extraction without transcription
pub(crate) async fn process_text(
    State(state): State<AppState>,
    Json(request): Json<ProcessTextRequest>,
) -> Result<Json<Value>, ApiError> {
    let started = Instant::now();

    let Some(extractor) = &state.extractor else {
        return Err(ApiError::internal("LLM provider is not configured"));
    };

    let record = extractor.extract(&request.text).await?;

    Ok(Json(assemble(&request.text, record, &*state.tickets, started)))
}

/// Handle `POST /process-audio`: validate, store, transcribe, extract
pub(crate) async fn process_audio(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let started = Instant::now();

    // Declared size first, so clearly oversized uploads are refused
    // before the body is pulled in
    if let Some(declared) = content_length(&headers) {
        state.upload.check_declared_size(declared)?;
    }

    let field = loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name().is_some_and(|name| AUDIO_FIELDS.contains(&name)) => break field,
            Ok(Some(_)) => {}
            Ok(None) => return Err(ApiError::bad_request("missing 'audio_file' field in multipart form")),
            Err(e) => return Err(ApiError::bad_request(format!("malformed multipart body: {e}"))),
        }
    };

    let filename = field
        .file_name()
        .map(ToString::to_string)
        .ok_or_else(|| ApiError::bad_request("uploaded file has no filename"))?;

    let extension = state.upload.validate_extension(&filename)?;

    let bytes = field
        .bytes()
        .await
        .map_err(|e| ApiError::bad_request(format!("failed to read audio data: {e}")))?;

    state.upload.check_size(bytes.len() as u64)?;

    let scratch = ScratchFile::write(state.upload.scratch_dir(), &extension, &bytes)
        .await
        .map_err(|e| ApiError::internal(format!("failed to store upload: {e}")))?;

    tracing::info!(path = %scratch.path().display(), bytes = bytes.len(), "upload stored");

    let result = pipeline::process_audio_file(&state, scratch.path(), started).await;

    // Cleanup covers success and error alike; timeouts are handled by
    // the scratch file's drop
    scratch.remove().await;

    let envelope = result?;

    match envelope.get("status").and_then(Value::as_str) {
        Some("success") => {
            tracing::info!(ticket = %envelope["ticket_id"], "audio processed");
        }
        _ => {
            tracing::warn!(error = %envelope["error"], "audio processing failed");
        }
    }

    Ok(Json(envelope))
}

fn content_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(http::header::CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}
