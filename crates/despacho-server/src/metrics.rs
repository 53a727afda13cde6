use std::sync::atomic::{AtomicU64, Ordering};

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use jiff::Timestamp;

use crate::error::ApiError;
use crate::state::AppState;

/// Process-lifetime request counters
///
/// Owned explicitly and injected into the request layer instead of
/// living in a global. Counters are recorded when a request completes,
/// so `total == success + error` holds at every observation point.
pub(crate) struct AppMetrics {
    requests_total: AtomicU64,
    requests_success: AtomicU64,
    requests_error: AtomicU64,
    startup: Timestamp,
}

impl AppMetrics {
    pub fn new() -> Self {
        Self {
            requests_total: AtomicU64::new(0),
            requests_success: AtomicU64::new(0),
            requests_error: AtomicU64::new(0),
            startup: Timestamp::now(),
        }
    }

    fn record(&self, is_error: bool) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        if is_error {
            self.requests_error.fetch_add(1, Ordering::Relaxed);
        } else {
            self.requests_success.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn requests_total(&self) -> u64 {
        self.requests_total.load(Ordering::Relaxed)
    }

    pub fn requests_success(&self) -> u64 {
        self.requests_success.load(Ordering::Relaxed)
    }

    pub fn requests_error(&self) -> u64 {
        self.requests_error.load(Ordering::Relaxed)
    }

    /// Percentage of successful requests, rounded to two decimals
    #[allow(clippy::cast_precision_loss)]
    pub fn success_rate(&self) -> f64 {
        let total = self.requests_total();
        if total == 0 {
            return 0.0;
        }
        let rate = self.requests_success() as f64 * 100.0 / total as f64;
        (rate * 100.0).round() / 100.0
    }

    pub fn startup(&self) -> Timestamp {
        self.startup
    }

    pub fn uptime_seconds(&self) -> i64 {
        (Timestamp::now().as_second() - self.startup.as_second()).max(0)
    }
}

/// Request governance middleware: runs every request under the
/// configured wall-clock budget and records its outcome
///
/// An elapsed budget converts into a 408 error envelope; the in-flight
/// handler future is dropped (provider calls are not cancelled on the
/// remote side).
pub(crate) async fn track_requests(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let uri = request.uri().clone();

    match tokio::time::timeout(state.request_timeout, next.run(request)).await {
        Ok(response) => {
            state.metrics.record(response.status().is_client_error() || response.status().is_server_error());
            response
        }
        Err(_) => {
            state.metrics.record(true);
            tracing::error!(%uri, "request exceeded the {}s budget", state.request_timeout.as_secs());
            ApiError::timeout().into_response()
        }
    }
}
