//! Multi-key Redis operations

use super::pool::RedisPool;
use crate::utils::error::{CheckError, Result};
use redis::AsyncCommands;

impl RedisPool {
    /// Get multiple keys at once
    pub async fn mget(&self, keys: &[String]) -> Result<Vec<Option<String>>> {
        if self.noop_mode || keys.is_empty() {
            return Ok(vec![None; keys.len()]);
        }

        let mut conn = self.get_connection();
        if let Some(ref mut c) = conn.conn {
            let values: Vec<Option<String>> = c.mget(keys).await.map_err(CheckError::Redis)?;
            Ok(values)
        } else {
            Ok(vec![None; keys.len()])
        }
    }

    /// Set multiple key-value pairs, each with its own TTL in seconds
    pub async fn mset_ex(&self, entries: &[(String, String, u64)]) -> Result<()> {
        if self.noop_mode || entries.is_empty() {
            return Ok(());
        }

        let mut conn = self.get_connection();
        if let Some(ref mut c) = conn.conn {
            // Keys are independent, so the pipeline does not need MULTI/EXEC
            let mut pipe = redis::pipe();
            for (key, value, ttl_seconds) in entries {
                pipe.set_ex(key, value, (*ttl_seconds).max(1)).ignore();
            }

            let _: () = pipe.query_async(c).await.map_err(CheckError::Redis)?;
        }
        Ok(())
    }
}
