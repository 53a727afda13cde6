use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::envelope::utc_now;
use crate::error::ApiError;
use crate::state::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Serialize)]
pub(crate) struct HealthResponse {
    status: &'static str,
    timestamp: String,
    version: &'static str,
}

fn healthy() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: utc_now(),
        version: VERSION,
    })
}

/// Handle `GET /`: basic liveness, no dependency checks
pub(crate) async fn liveness() -> Json<HealthResponse> {
    healthy()
}

/// Handle `GET /health`: unhealthy when provider credentials are absent
///
/// Missing credentials degrade this endpoint only; the processing
/// routes stay reachable and fail per-request.
pub(crate) async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    if !state.credentials_configured {
        return Err(ApiError::service_unavailable(
            "speech or LLM provider credentials are not configured",
        ));
    }

    Ok(healthy())
}
