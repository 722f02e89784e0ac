//! Existence cache backed by Redis

use super::pool::RedisPool;
use crate::core::traits::ExistenceStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
impl ExistenceStore for RedisPool {
    fn backend_name(&self) -> &'static str {
        if self.noop_mode { "redis-noop" } else { "redis" }
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        RedisPool::get(self, key).await
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        self.set_ex(key, value, ttl.as_secs()).await
    }

    async fn get_many(&self, keys: &[String]) -> Result<Vec<Option<String>>> {
        self.mget(keys).await
    }

    async fn set_many(&self, entries: &[(String, String, Duration)]) -> Result<()> {
        let entries: Vec<(String, String, u64)> = entries
            .iter()
            .map(|(key, value, ttl)| (key.clone(), value.clone(), ttl.as_secs()))
            .collect();
        self.mset_ex(&entries).await
    }
}
