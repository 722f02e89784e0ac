//! Upstream lookup service configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upstream lookup service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// API base URL, without the `/videos` path
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key sent as the `key` query parameter
    #[serde(default)]
    pub api_key: String,
    /// Identifiers per upstream call
    #[serde(default = "default_max_ids_per_call")]
    pub max_ids_per_call: usize,
    /// Per-call timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Retries of transient failures after the first attempt
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Initial backoff in milliseconds
    #[serde(default = "default_base_delay")]
    pub base_delay_ms: u64,
    /// Backoff cap in milliseconds
    #[serde(default = "default_max_delay")]
    pub max_delay_ms: u64,
    #[serde(default = "default_backoff_multiplier")]
    pub backoff_multiplier: f64,
    /// Chunks in flight at once
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            max_ids_per_call: default_max_ids_per_call(),
            timeout: default_timeout(),
            max_retries: default_max_retries(),
            base_delay_ms: default_base_delay(),
            max_delay_ms: default_max_delay(),
            backoff_multiplier: default_backoff_multiplier(),
            concurrency: default_concurrency(),
            user_agent: default_user_agent(),
        }
    }
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    pub fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }
}

// The API key stays out of Debug output so configs can be logged.
impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &if self.api_key.is_empty() { "" } else { "***" })
            .field("max_ids_per_call", &self.max_ids_per_call)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("base_delay_ms", &self.base_delay_ms)
            .field("max_delay_ms", &self.max_delay_ms)
            .field("backoff_multiplier", &self.backoff_multiplier)
            .field("concurrency", &self.concurrency)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
