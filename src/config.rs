use std::time::Duration;

/// Number of envelopes the relay holds before refusing deliveries.
pub const DEFAULT_RELAY_CAPACITY: usize = 100;

/// Idle time after which a subscriber receives a heartbeat.
pub const DEFAULT_HEARTBEAT_INTERVAL: Duration = Duration::from_secs(2);

/// Relay queue sizing and liveness timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayConfig {
    pub capacity: usize,
    pub heartbeat_interval: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_RELAY_CAPACITY,
            heartbeat_interval: DEFAULT_HEARTBEAT_INTERVAL,
        }
    }
}
