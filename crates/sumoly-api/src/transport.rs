// Shared transport configuration for building reqwest::Client instances.
//
// One reqwest::Client is built per sumoly Client and reused for every call,
// including the construction-time endpoint probe (which relies on the
// default redirect-following policy).

use std::time::Duration;

/// Transport configuration for the underlying HTTP client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Per-request timeout. The management API can take a while on large
    /// content exports, hence the generous default.
    pub timeout: Duration,
    /// `User-Agent` header sent on every request.
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            user_agent: concat!("sumoly/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()
            .map_err(crate::error::Error::Transport)
    }
}
