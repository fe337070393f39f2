//! Polling-workflow configuration.

use serde::{Deserialize, Serialize};

/// Default interval between status fetches, in milliseconds.
const fn default_poll_interval_ms() -> u64 {
    5_000
}

/// Default number of local retries for one failed fetch.
const fn default_poll_retries() -> u32 {
    3
}

/// Default fixed backoff between retries of a failed fetch, in milliseconds.
const fn default_retry_backoff_ms() -> u64 {
    1_000
}

/// Default TTL for cached poll responses, in seconds.
const fn default_cache_ttl_secs() -> u64 {
    300
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResearchConfig {
    /// Interval between status fetches while a job is in flight.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Local retries permitted for a single failed fetch before the error
    /// surfaces to the caller.
    #[serde(default = "default_poll_retries")]
    pub poll_retries: u32,

    /// Fixed delay between those retries.
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,

    /// How long cached poll snapshots stay fresh.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            poll_retries: default_poll_retries(),
            retry_backoff_ms: default_retry_backoff_ms(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_polling_contract() {
        let config = ResearchConfig::default();
        assert_eq!(config.poll_interval_ms, 5_000);
        assert_eq!(config.poll_retries, 3);
        assert_eq!(config.retry_backoff_ms, 1_000);
        assert_eq!(config.cache_ttl_secs, 300);
    }
}
