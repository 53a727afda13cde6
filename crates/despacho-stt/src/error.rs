use http::StatusCode;

use despacho_core::HttpError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SttError>;

/// Errors that can occur while transcribing audio
#[derive(Debug, Error)]
pub enum SttError {
    /// Could not reach the speech provider
    #[error("connection error: {0}")]
    ConnectionError(String),

    /// Provider rejected our credentials
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Provider rejected the request as malformed
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Provider returned a non-success status
    #[error("provider returned {status}: {message}")]
    ProviderApiError { status: u16, message: String },

    /// Provider response could not be decoded
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

impl HttpError for SttError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ConnectionError(_) | Self::ProviderApiError { .. } | Self::MalformedResponse(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::AuthenticationFailed(_) => StatusCode::UNAUTHORIZED,
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::ConnectionError(_) => "connection_error",
            Self::AuthenticationFailed(_) => "authentication_error",
            Self::InvalidRequest(_) => "invalid_request_error",
            Self::ProviderApiError { .. } => "provider_error",
            Self::MalformedResponse(_) => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::MalformedResponse(_) => "speech provider returned an unreadable response".to_owned(),
            other => other.to_string(),
        }
    }
}
