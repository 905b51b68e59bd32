//! Board configuration.

use std::time::Duration;

/// Seconds a status message stays visible before it is hidden
pub const DEFAULT_MESSAGE_TTL_SECS: u64 = 5;

/// Default base URL of the activities API
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    /// Delay before a shown status message is hidden
    pub message_ttl: Duration,
}

impl BoardConfig {
    pub fn new(message_ttl: Duration) -> Self {
        Self { message_ttl }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_MESSAGE_TTL_SECS))
    }
}
