use std::sync::Arc;
use std::time::Duration;

use despacho_extract::Extractor;
use despacho_stt::Transcriber;

use crate::metrics::AppMetrics;
use crate::ticket::TicketIssuer;
use crate::upload::UploadPolicy;

/// Shared per-process state injected into handlers and middleware
#[derive(Clone)]
pub(crate) struct AppState {
    pub metrics: Arc<AppMetrics>,
    pub transcriber: Option<Arc<dyn Transcriber>>,
    pub extractor: Option<Arc<dyn Extractor>>,
    pub tickets: Arc<dyn TicketIssuer>,
    pub upload: Arc<UploadPolicy>,
    pub request_timeout: Duration,
    /// Whether both provider credential sets are configured; gates /health
    pub credentials_configured: bool,
}
