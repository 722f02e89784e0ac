//! Cache resolver type definitions

use crate::core::types::ExistenceResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Value stored under each cache key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedEntry {
    pub result: ExistenceResult,
    /// When the upstream answered
    pub checked_at: DateTime<Utc>,
}

impl CachedEntry {
    pub fn new(result: ExistenceResult) -> Self {
        Self {
            result,
            checked_at: Utc::now(),
        }
    }
}

/// Atomic resolver counters, updated without locking
#[derive(Debug, Default)]
pub(crate) struct AtomicResolverStats {
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    pub writes: AtomicU64,
    pub errors: AtomicU64,
}

impl AtomicResolverStats {
    pub fn snapshot(&self) -> ResolverStats {
        ResolverStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            writes: self.writes.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
        }
    }
}

/// Resolver statistics snapshot
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolverStats {
    /// Identifiers answered from the cache
    pub hits: u64,
    /// Identifiers that needed an upstream lookup
    pub misses: u64,
    /// Entries written
    pub writes: u64,
    /// Backend failures (reads and writes)
    pub errors: u64,
}

impl ResolverStats {
    /// Calculate hit rate
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
