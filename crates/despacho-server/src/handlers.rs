mod health;
mod process;
mod stats;

pub(crate) use health::{health, liveness};
pub(crate) use process::{process_audio, process_text};
pub(crate) use stats::stats;

use crate::error::ApiError;

/// Fallback for unknown routes, keeping the normalized error shape
pub(crate) async fn not_found() -> ApiError {
    ApiError::not_found()
}
