//! Key-value cache backend trait
//!
//! Backends store opaque string values under string keys with a per-key
//! time-to-live. Absent or expired keys read as `None`, never as an error.

use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Cache backend used by the cache resolver
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExistenceStore: Send + Sync {
    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;

    /// Get a value
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set a value that expires after `ttl`
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<()>;

    /// Get several values; the output lines up with `keys`
    async fn get_many(&self, keys: &[String]) -> Result<Vec<Option<String>>> {
        let mut values = Vec::with_capacity(keys.len());
        for key in keys {
            values.push(self.get(key).await?);
        }
        Ok(values)
    }

    /// Set several values, each with its own TTL
    async fn set_many(&self, entries: &[(String, String, Duration)]) -> Result<()> {
        for (key, value, ttl) in entries {
            self.set(key, value, *ttl).await?;
        }
        Ok(())
    }
}
