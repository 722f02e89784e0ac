//! Configuration data models
//!
//! This module defines all configuration structures used by the validator.

#![allow(missing_docs)]

pub mod cache;
pub mod logging;
pub mod storage;
pub mod upstream;

pub use cache::*;
pub use logging::*;
pub use storage::*;
pub use upstream::*;

/// Hard per-call identifier limit of the upstream `videos.list` endpoint
pub const MAX_IDS_PER_CALL: usize = 50;

/// Longest retention accepted for any cache entry, in days
pub const MAX_TTL_DAYS: u64 = 3650;

pub fn default_base_url() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

pub fn default_max_ids_per_call() -> usize {
    MAX_IDS_PER_CALL
}

/// Default per-call timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

pub fn default_max_retries() -> u32 {
    2
}

pub fn default_base_delay() -> u64 {
    200
}

pub fn default_max_delay() -> u64 {
    5000
}

pub fn default_backoff_multiplier() -> f64 {
    2.0
}

pub fn default_concurrency() -> usize {
    4
}

pub fn default_user_agent() -> String {
    format!("vidcheck-rs/{}", env!("CARGO_PKG_VERSION"))
}

pub fn default_cache_enabled() -> bool {
    true
}

pub fn default_namespace() -> String {
    "existence-cache".to_string()
}

pub fn default_key_version() -> String {
    "v1".to_string()
}

pub fn default_positive_ttl_days() -> u64 {
    30
}

pub fn default_negative_ttl_days() -> u64 {
    1
}

pub fn default_negative_jitter_hours() -> u64 {
    6
}

pub fn default_max_memory_entries() -> usize {
    100_000
}

pub fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

/// Default Redis connection timeout in seconds
pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_log_level() -> String {
    "info".to_string()
}
