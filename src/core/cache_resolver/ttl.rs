//! Time-to-live selection for cached results

use crate::config::CacheConfig;
use crate::core::types::ExistenceResult;
use rand::Rng;
use std::time::Duration;

/// Asymmetric retention: existing videos are kept long, missing ones short
///
/// Negative entries get a random extra delay in `[0, negative_jitter]` so a
/// bulk import does not expire all at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtlPolicy {
    pub positive: Duration,
    pub negative: Duration,
    pub negative_jitter: Duration,
}

impl TtlPolicy {
    pub fn new(positive: Duration, negative: Duration, negative_jitter: Duration) -> Self {
        Self {
            positive,
            negative,
            negative_jitter,
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(
            config.positive_ttl(),
            config.negative_ttl(),
            config.negative_jitter(),
        )
    }

    /// TTL for a result about to be written
    pub fn ttl_for(&self, result: &ExistenceResult) -> Duration {
        if result.exists() {
            self.positive
        } else {
            self.negative + self.jitter()
        }
    }

    /// Longest TTL a negative entry can receive
    pub fn max_negative(&self) -> Duration {
        self.negative + self.negative_jitter
    }

    fn jitter(&self) -> Duration {
        let bound = self.negative_jitter.as_secs();
        if bound == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs(rand::thread_rng().gen_range(0..=bound))
    }
}

impl Default for TtlPolicy {
    fn default() -> Self {
        Self::from_config(&CacheConfig::default())
    }
}
