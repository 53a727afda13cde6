use http::StatusCode;

/// HTTP mapping for a feature crate's error type
///
/// Provider crates stay free of axum types; the server layer asks an
/// error how it should appear on the wire and renders the normalized
/// envelope itself.
pub trait HttpError: std::error::Error {
    /// Status code the error maps to
    fn status_code(&self) -> StatusCode;

    /// Stable machine-readable tag for logs (e.g. `invalid_request_error`)
    fn error_type(&self) -> &str;

    /// Message safe to return to API consumers
    fn client_message(&self) -> String;
}
