//! Process-local cache backend
//!
//! Entries carry their own expiry instant on the tokio clock, so paused-time
//! tests can move past a TTL without sleeping.

use crate::core::traits::ExistenceStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

/// Writes between sweeps of expired entries
const SWEEP_INTERVAL: u64 = 1000;

/// Expiry horizon used when `now + ttl` does not fit in an `Instant`
const MAX_TTL: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

#[derive(Debug, Clone)]
struct MemoryEntry {
    value: String,
    expires_at: Instant,
}

impl MemoryEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// In-memory key-value store with per-key TTL
#[derive(Debug)]
pub struct MemoryStore {
    entries: DashMap<String, MemoryEntry>,
    max_entries: usize,
    writes: AtomicU64,
}

impl MemoryStore {
    /// Create a store holding at most `max_entries` live keys
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: DashMap::new(),
            max_entries: max_entries.max(1),
            writes: AtomicU64::new(0),
        }
    }

    /// Number of stored entries, expired ones included until swept
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remaining time to live of a key, `None` when absent or expired
    pub fn ttl(&self, key: &str) -> Option<Duration> {
        let now = Instant::now();
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| entry.expires_at - now)
    }

    /// Drop expired entries, returning how many were removed
    pub fn cleanup_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        let removed = before.saturating_sub(self.entries.len());
        if removed > 0 {
            info!("Cleaned up {} expired cache entries", removed);
        }
        removed
    }

    fn insert(&self, key: &str, value: &str, ttl: Duration) {
        let writes = self.writes.fetch_add(1, Ordering::Relaxed) + 1;
        if writes.is_multiple_of(SWEEP_INTERVAL) {
            self.cleanup_expired();
        }

        if self.entries.len() >= self.max_entries && !self.entries.contains_key(key) {
            self.cleanup_expired();
            if self.entries.len() >= self.max_entries {
                debug!("Memory cache full, not caching key: {}", key);
                return;
            }
        }

        let now = Instant::now();
        let expires_at = now
            .checked_add(ttl)
            .unwrap_or_else(|| now + MAX_TTL.min(ttl));
        self.entries.insert(
            key.to_string(),
            MemoryEntry {
                value: value.to_string(),
                expires_at,
            },
        );
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(crate::config::default_max_memory_entries())
    }
}

#[async_trait]
impl ExistenceStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let now = Instant::now();
        let value = match self.entries.get(key) {
            Some(entry) if !entry.is_expired(now) => return Ok(Some(entry.value.clone())),
            Some(_) => None,
            None => return Ok(None),
        };
        // Expired: drop it outside the read guard
        self.entries.remove_if(key, |_, entry| entry.is_expired(now));
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        self.insert(key, value, ttl);
        Ok(())
    }
}
