//! Single-key Redis operations

use super::pool::RedisPool;
use crate::utils::error::{CheckError, Result};
use redis::{AsyncCommands, RedisResult};

impl RedisPool {
    /// Get a value from cache
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        if self.noop_mode {
            return Ok(None);
        }

        let mut conn = self.get_connection();
        if let Some(ref mut c) = conn.conn {
            let result: RedisResult<Option<String>> = c.get(key).await;
            match result {
                Ok(value) => Ok(value),
                Err(e) if e.kind() == redis::ErrorKind::TypeError => Ok(None),
                Err(e) => Err(CheckError::Redis(e)),
            }
        } else {
            Ok(None)
        }
    }

    /// Set a key-value pair that expires after `ttl_seconds`
    pub async fn set_ex(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<()> {
        if self.noop_mode {
            return Ok(());
        }

        let mut conn = self.get_connection();
        if let Some(ref mut c) = conn.conn {
            let _: () = c
                .set_ex(key, value, ttl_seconds.max(1))
                .await
                .map_err(CheckError::Redis)?;
        }
        Ok(())
    }
}
