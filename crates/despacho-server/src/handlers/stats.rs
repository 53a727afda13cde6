use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub(crate) struct StatsResponse {
    requests_total: u64,
    requests_success: u64,
    requests_error: u64,
    success_rate: f64,
    uptime_seconds: i64,
    startup_time: String,
}

/// Handle `GET /stats`
pub(crate) async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let metrics = &state.metrics;

    Json(StatsResponse {
        requests_total: metrics.requests_total(),
        requests_success: metrics.requests_success(),
        requests_error: metrics.requests_error(),
        success_rate: metrics.success_rate(),
        uptime_seconds: metrics.uptime_seconds(),
        startup_time: metrics.startup().to_string(),
    })
}
