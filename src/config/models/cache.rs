//! Cache configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

const SECS_PER_HOUR: u64 = 60 * 60;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Which key-value store backs the existence cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// Process-local store
    #[default]
    Memory,
    /// Shared Redis instance
    Redis,
}

impl FromStr for CacheBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "redis" => Ok(Self::Redis),
            other => Err(format!("unknown cache backend '{}'", other)),
        }
    }
}

/// Existence cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Enable caching; when off every identifier is looked up upstream
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub backend: CacheBackend,
    /// Key namespace prefix
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Key version segment; bump it when the stored value shape changes
    #[serde(default = "default_key_version")]
    pub version: String,
    /// Retention of `exists = true` results, in days
    #[serde(default = "default_positive_ttl_days")]
    pub positive_ttl_days: u64,
    /// Base retention of `exists = false` results, in days
    #[serde(default = "default_negative_ttl_days")]
    pub negative_ttl_days: u64,
    /// Upper bound of the random extension added to negative TTLs, in hours
    #[serde(default = "default_negative_jitter_hours")]
    pub negative_jitter_hours: u64,
    /// Also cache the negatives synthesized for chunks that failed open
    #[serde(default)]
    pub cache_failed_chunks: bool,
    /// Entry cap of the memory backend
    #[serde(default = "default_max_memory_entries")]
    pub max_memory_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
            backend: CacheBackend::default(),
            namespace: default_namespace(),
            version: default_key_version(),
            positive_ttl_days: default_positive_ttl_days(),
            negative_ttl_days: default_negative_ttl_days(),
            negative_jitter_hours: default_negative_jitter_hours(),
            cache_failed_chunks: false,
            max_memory_entries: default_max_memory_entries(),
        }
    }
}

impl CacheConfig {
    pub fn positive_ttl(&self) -> Duration {
        Duration::from_secs(self.positive_ttl_days.saturating_mul(SECS_PER_DAY))
    }

    pub fn negative_ttl(&self) -> Duration {
        Duration::from_secs(self.negative_ttl_days.saturating_mul(SECS_PER_DAY))
    }

    pub fn negative_jitter(&self) -> Duration {
        Duration::from_secs(self.negative_jitter_hours.saturating_mul(SECS_PER_HOUR))
    }
}
