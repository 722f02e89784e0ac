//! Cache storage backends
//!
//! The existence cache runs on either a process-local memory store or a
//! shared Redis instance. Backend selection never fails: an unreachable Redis
//! degrades to a no-op store so validation proceeds as all-miss.

pub mod memory;
#[cfg(feature = "redis")]
pub mod redis;

pub use memory::MemoryStore;

use crate::config::{CacheBackend, CacheConfig, StorageConfig};
use crate::core::traits::ExistenceStore;
use std::sync::Arc;
use tracing::{debug, info};

/// Build the configured cache backend
pub async fn connect_store(
    cache: &CacheConfig,
    storage: &StorageConfig,
) -> Arc<dyn ExistenceStore> {
    match cache.backend {
        CacheBackend::Memory => {
            debug!(
                "Using in-memory existence cache (max {} entries)",
                cache.max_memory_entries
            );
            Arc::new(MemoryStore::new(cache.max_memory_entries))
        }
        #[cfg(feature = "redis")]
        CacheBackend::Redis => {
            let pool = redis::RedisPool::connect_or_noop(&storage.redis).await;
            info!("Using Redis existence cache (noop: {})", pool.is_noop());
            Arc::new(pool)
        }
        #[cfg(not(feature = "redis"))]
        CacheBackend::Redis => {
            let _ = storage;
            info!("Redis support not compiled in, falling back to in-memory cache");
            Arc::new(MemoryStore::new(cache.max_memory_entries))
        }
    }
}
