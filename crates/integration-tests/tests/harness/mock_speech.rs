//! Mock speech recognition backend for integration tests
//!
//! Answers `speech:recognize` with a canned transcript, an empty result
//! set, or an error, optionally after a delay.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// Mock speech recognition backend
pub struct MockSpeech {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockSpeechState>,
}

struct MockSpeechState {
    recognize_count: AtomicU32,
    /// Transcript returned per request; `None` means no speech recognized
    transcript: Option<String>,
    /// Sleep before answering, for timeout tests
    delay: Option<Duration>,
    /// Answer every request with 500
    always_fail: bool,
}

impl MockSpeech {
    /// Start a mock that recognizes every upload as `transcript`
    pub async fn start(transcript: &str) -> anyhow::Result<Self> {
        Self::start_inner(Some(transcript.to_owned()), None, false).await
    }

    /// Start a mock that hears nothing in any upload
    pub async fn start_empty() -> anyhow::Result<Self> {
        Self::start_inner(None, None, false).await
    }

    /// Start a mock that answers with 500 on every request
    pub async fn start_failing() -> anyhow::Result<Self> {
        Self::start_inner(None, None, true).await
    }

    /// Start a mock that waits `delay` before answering
    pub async fn start_delayed(transcript: &str, delay: Duration) -> anyhow::Result<Self> {
        Self::start_inner(Some(transcript.to_owned()), Some(delay), false).await
    }

    async fn start_inner(transcript: Option<String>, delay: Option<Duration>, always_fail: bool) -> anyhow::Result<Self> {
        let state = Arc::new(MockSpeechState {
            recognize_count: AtomicU32::new(0),
            transcript,
            delay,
            always_fail,
        });

        let app = Router::new()
            .route("/v1/speech:recognize", routing::post(handle_recognize))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as a provider
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of recognition requests received
    pub fn recognize_count(&self) -> u32 {
        self.state.recognize_count.load(Ordering::Relaxed)
    }
}

impl Drop for MockSpeech {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_recognize(
    State(state): State<Arc<MockSpeechState>>,
    Json(_req): Json<serde_json::Value>,
) -> impl IntoResponse {
    state.recognize_count.fetch_add(1, Ordering::Relaxed);

    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }

    if state.always_fail {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "error": { "code": 500, "message": "mock server intentional failure" }
            })),
        )
            .into_response();
    }

    let results = match &state.transcript {
        Some(text) => serde_json::json!([
            { "alternatives": [{ "transcript": text, "confidence": 0.92 }] }
        ]),
        None => serde_json::json!([]),
    };

    Json(serde_json::json!({ "results": results })).into_response()
}
