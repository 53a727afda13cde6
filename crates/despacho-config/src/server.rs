use std::net::SocketAddr;

use serde::Deserialize;

use crate::health::HealthConfig;

/// HTTP server configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind the listener to
    pub listen_address: Option<SocketAddr>,
    /// Wall-clock budget applied to every request, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Health endpoint configuration
    #[serde(default)]
    pub health: HealthConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: None,
            request_timeout_secs: default_request_timeout_secs(),
            health: HealthConfig::default(),
        }
    }
}

const fn default_request_timeout_secs() -> u64 {
    30
}
