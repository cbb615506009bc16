//! Client configuration
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | DISH_API_URL | http://localhost:9000 | Catalog backend base URL |
//! | DISH_API_TIMEOUT_SECS | 30 | Per-request timeout |

use std::time::Duration;

use crate::error::ClientResult;
use crate::http::NetworkDishGateway;

pub const DEFAULT_BASE_URL: &str = "http://localhost:9000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for connecting to the catalog backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "http://localhost:9000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load configuration from the process environment
    ///
    /// Unset or unparsable values fall back to the defaults. A zero timeout
    /// counts as unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("DISH_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout = lookup("DISH_API_TIMEOUT_SECS")
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .filter(|&secs| secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self { base_url, timeout }
    }

    /// Set the request timeout; zero keeps the current value
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        if seconds == 0 {
            tracing::warn!(timeout = self.timeout, "ignoring zero request timeout");
        } else {
            self.timeout = seconds;
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Create a network gateway from this configuration
    pub fn build_gateway(&self) -> ClientResult<NetworkDishGateway> {
        NetworkDishGateway::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
