#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod envelope;
mod error;
mod handlers;
mod metrics;
mod pipeline;
mod state;
mod ticket;
mod upload;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use despacho_config::Config;

pub use upload::sweep_scratch;

use crate::metrics::AppMetrics;
use crate::state::AppState;
use crate::ticket::HashTicketIssuer;
use crate::upload::UploadPolicy;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a configured provider is missing credentials
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8000)));

        let transcriber = despacho_stt::build_transcriber(&config.stt)?;
        let extractor = despacho_extract::build_extractor(&config.llm)?;
        let credentials_configured = transcriber.is_some() && extractor.is_some();

        let upload = Arc::new(UploadPolicy::new(&config.upload));

        tracing::info!(
            scratch_dir = %upload.scratch_dir().display(),
            stt = transcriber.is_some(),
            llm = extractor.is_some(),
            "request pipeline initialized"
        );

        let state = AppState {
            metrics: Arc::new(AppMetrics::new()),
            transcriber,
            extractor,
            tickets: Arc::new(HashTicketIssuer),
            upload: Arc::clone(&upload),
            request_timeout: Duration::from_secs(config.server.request_timeout_secs),
            credentials_configured,
        };

        // Body limit sits above the policy ceiling so oversized uploads
        // get the policy's 413 envelope instead of axum's rejection
        let body_limit = usize::try_from(upload.body_limit()).unwrap_or(usize::MAX);

        let mut app = Router::new()
            .route("/", get(handlers::liveness))
            .route("/stats", get(handlers::stats))
            .route("/process-audio", post(handlers::process_audio))
            .route("/process-text", post(handlers::process_text));

        if config.server.health.enabled {
            app = app.route(&config.server.health.path, get(handlers::health));
        }

        let app = app
            .fallback(handlers::not_found)
            .with_state(state.clone())
            .layer(DefaultBodyLimit::max(body_limit))
            .layer(axum::middleware::from_fn_with_state(state, metrics::track_requests))
            .layer(TraceLayer::new_for_http());

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
