use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::RelayConfig;
use crate::forward::DEFAULT_FORWARD_TIMEOUT;

#[derive(Debug, Clone)]
pub struct Config {
    // Listen address
    pub listen_addr: SocketAddr,
    // log level for http tracing
    pub log_level: tracing::Level,
    // Optional JSON key pair served by GET /api/keys
    pub key_file: Option<PathBuf>,
    pub relay: RelayConfig,
    // Timeout for a single POST to a peer's relay
    pub forward_timeout: Duration,
}

impl Config {
    pub fn new(listen_addr: SocketAddr, key_file: Option<PathBuf>) -> Self {
        tracing::info!(
            "Creating HTTP server Config: listen_addr={}, key_file={:?}",
            listen_addr,
            key_file
        );
        Self {
            listen_addr,
            log_level: tracing::Level::INFO,
            key_file,
            relay: RelayConfig::default(),
            forward_timeout: DEFAULT_FORWARD_TIMEOUT,
        }
    }
}
