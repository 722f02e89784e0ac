//! Read-through / write-through access to the existence cache

use super::keys::CacheKeyBuilder;
use super::ttl::TtlPolicy;
use super::types::{AtomicResolverStats, CachedEntry, ResolverStats};
use crate::config::{CacheConfig, StorageConfig};
use crate::core::traits::ExistenceStore;
use crate::core::types::{ExistenceResult, ResultMap};
use crate::storage::{MemoryStore, connect_store};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;
use tracing::{debug, warn};

/// Cache front for the batch validator
pub struct CacheResolver {
    store: Arc<dyn ExistenceStore>,
    keys: CacheKeyBuilder,
    ttl: TtlPolicy,
    enabled: bool,
    stats: AtomicResolverStats,
}

impl CacheResolver {
    pub fn new(store: Arc<dyn ExistenceStore>, keys: CacheKeyBuilder, ttl: TtlPolicy) -> Self {
        Self {
            store,
            keys,
            ttl,
            enabled: true,
            stats: AtomicResolverStats::default(),
        }
    }

    /// Resolver that never reads or writes; every identifier is a miss
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new(
                Arc::new(MemoryStore::new(1)),
                CacheKeyBuilder::default(),
                TtlPolicy::default(),
            )
        }
    }

    /// Connect the configured backend and build a resolver over it
    pub async fn from_config(cache: &CacheConfig, storage: &StorageConfig) -> Self {
        if !cache.enabled {
            debug!("Existence cache disabled");
            return Self::disabled();
        }
        let store = connect_store(cache, storage).await;
        Self::new(
            store,
            CacheKeyBuilder::from_config(cache),
            TtlPolicy::from_config(cache),
        )
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn keys(&self) -> &CacheKeyBuilder {
        &self.keys
    }

    pub fn ttl_policy(&self) -> &TtlPolicy {
        &self.ttl
    }

    pub fn stats(&self) -> ResolverStats {
        self.stats.snapshot()
    }

    /// Split `identifiers` into cached results and misses
    ///
    /// Never fails: a backend error turns every identifier into a miss, and an
    /// entry that cannot be decoded is a miss on its own.
    pub async fn resolve(&self, identifiers: &[String]) -> (ResultMap, Vec<String>) {
        if !self.enabled || identifiers.is_empty() {
            return (ResultMap::new(), identifiers.to_vec());
        }

        let keys = self.keys.keys(identifiers);
        let values = match self.store.get_many(&keys).await {
            Ok(values) if values.len() == identifiers.len() => values,
            Ok(values) => {
                warn!(
                    "Cache backend {} returned {} values for {} keys, treating all as misses",
                    self.store.backend_name(),
                    values.len(),
                    identifiers.len()
                );
                self.stats.errors.fetch_add(1, Ordering::Relaxed);
                return self.all_miss(identifiers);
            }
            Err(e) => {
                warn!(
                    "Cache backend {} unavailable, treating all as misses: {}",
                    self.store.backend_name(),
                    e
                );
                self.stats.errors.fetch_add(1, Ordering::Relaxed);
                return self.all_miss(identifiers);
            }
        };

        let mut hits = ResultMap::with_capacity(identifiers.len());
        let mut misses = Vec::new();
        for (id, value) in identifiers.iter().zip(values) {
            match value.and_then(|raw| self.decode(id, &raw)) {
                Some(result) => hits.insert(result),
                None => misses.push(id.clone()),
            }
        }

        self.stats
            .hits
            .fetch_add(hits.len() as u64, Ordering::Relaxed);
        self.stats
            .misses
            .fetch_add(misses.len() as u64, Ordering::Relaxed);
        debug!("Cache resolved {} hits, {} misses", hits.len(), misses.len());

        (hits, misses)
    }

    /// Write one result with its TTL class; failures are logged and dropped
    pub async fn store(&self, result: &ExistenceResult) {
        if !self.enabled {
            return;
        }
        let Some((key, value, ttl)) = self.encode(result) else {
            return;
        };

        match self.store.set(&key, &value, ttl).await {
            Ok(()) => {
                self.stats.writes.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                self.stats.errors.fetch_add(1, Ordering::Relaxed);
                warn!("Failed to cache result for {}: {}", result.id(), e);
            }
        }
    }

    /// Write several results in one backend round-trip where supported
    pub async fn store_many(&self, results: &[ExistenceResult]) {
        if !self.enabled || results.is_empty() {
            return;
        }
        let entries: Vec<(String, String, Duration)> =
            results.iter().filter_map(|r| self.encode(r)).collect();

        match self.store.set_many(&entries).await {
            Ok(()) => {
                self.stats
                    .writes
                    .fetch_add(entries.len() as u64, Ordering::Relaxed);
                debug!("Cached {} results", entries.len());
            }
            Err(e) => {
                self.stats.errors.fetch_add(1, Ordering::Relaxed);
                warn!("Failed to cache {} results: {}", entries.len(), e);
            }
        }
    }

    fn all_miss(&self, identifiers: &[String]) -> (ResultMap, Vec<String>) {
        self.stats
            .misses
            .fetch_add(identifiers.len() as u64, Ordering::Relaxed);
        (ResultMap::new(), identifiers.to_vec())
    }

    fn encode(&self, result: &ExistenceResult) -> Option<(String, String, Duration)> {
        match serde_json::to_string(&CachedEntry::new(result.clone())) {
            Ok(value) => Some((self.keys.key(result.id()), value, self.ttl.ttl_for(result))),
            Err(e) => {
                warn!("Failed to encode cache entry for {}: {}", result.id(), e);
                None
            }
        }
    }

    fn decode(&self, id: &str, raw: &str) -> Option<ExistenceResult> {
        match serde_json::from_str::<CachedEntry>(raw) {
            Ok(entry) if entry.result.id() == id => Some(entry.result),
            Ok(entry) => {
                debug!(
                    "Cache entry for {} holds result for {}, ignoring",
                    id,
                    entry.result.id()
                );
                None
            }
            Err(e) => {
                debug!("Undecodable cache entry for {}: {}", id, e);
                None
            }
        }
    }
}

impl fmt::Debug for CacheResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheResolver")
            .field("backend", &self.store.backend_name())
            .field("keys", &self.keys)
            .field("ttl", &self.ttl)
            .field("enabled", &self.enabled)
            .finish()
    }
}
