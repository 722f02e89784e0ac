//! Test fixtures
//!
//! Configuration tuned for tests: tiny backoff so retries do not slow the
//! suite down, a short timeout, and a fixed API key.

use vidcheck::Config;
use vidcheck::config::UpstreamConfig;

pub const TEST_API_KEY: &str = "test-key";

/// `count` distinct identifiers shaped like real ones
pub fn video_ids(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("vid{:08}", i)).collect()
}

/// Upstream settings pointing at a mock server
pub fn upstream_config(base_url: &str) -> UpstreamConfig {
    UpstreamConfig {
        base_url: base_url.to_string(),
        api_key: TEST_API_KEY.to_string(),
        timeout: 2,
        max_retries: 2,
        base_delay_ms: 1,
        max_delay_ms: 5,
        ..UpstreamConfig::default()
    }
}

/// Full configuration with the in-memory cache
pub fn test_config(base_url: &str) -> Config {
    Config {
        upstream: upstream_config(base_url),
        ..Config::default()
    }
}
