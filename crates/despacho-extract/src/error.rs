use http::StatusCode;

use despacho_core::HttpError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur while extracting an order from text
///
/// Malformed model output is not an error here: it becomes a
/// `tipo:"error"` record so callers keep the raw text for diagnostics.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Upstream LLM provider call failed
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Provider rejected our credentials
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Provider rejected the request as malformed
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Provider returned a response without a usable completion
    #[error("empty completion: {0}")]
    EmptyCompletion(String),
}

impl HttpError for ExtractError {
    fn status_code(&self) -> StatusCode {
        match self {
            // Provider failures surface as a plain 500 at this API's
            // boundary rather than a gateway status
            Self::Upstream(_) | Self::EmptyCompletion(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::AuthenticationFailed(_) => StatusCode::UNAUTHORIZED,
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::Upstream(_) => "upstream_error",
            Self::AuthenticationFailed(_) => "authentication_error",
            Self::InvalidRequest(_) => "invalid_request_error",
            Self::EmptyCompletion(_) => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::EmptyCompletion(_) => "LLM provider returned no completion".to_owned(),
            other => other.to_string(),
        }
    }
}
