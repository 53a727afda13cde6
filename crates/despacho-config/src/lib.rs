#![allow(clippy::must_use_candidate)]

mod env;
pub mod health;
pub mod llm;
mod loader;
pub mod server;
pub mod stt;
pub mod upload;

use serde::Deserialize;

pub use health::*;
pub use llm::*;
pub use server::*;
pub use stt::*;
pub use upload::*;

/// Top-level despacho configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Audio upload limits and scratch storage
    #[serde(default)]
    pub upload: UploadConfig,
    /// Speech-to-text provider configuration
    #[serde(default)]
    pub stt: SttConfig,
    /// LLM provider configuration
    #[serde(default)]
    pub llm: LlmConfig,
}
