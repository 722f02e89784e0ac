//! Redis connection management
//!
//! A single multiplexed connection is shared by all callers.

use crate::config::RedisConfig;
use crate::utils::error::{CheckError, Result};
use redis::{Client, aio::MultiplexedConnection};
use tracing::{debug, info, warn};

/// Redis connection pool (supports no-op mode when Redis is unavailable)
#[derive(Clone)]
pub struct RedisPool {
    /// Redis client (None in no-op mode)
    pub(crate) client: Option<Client>,
    /// Shared connection (None in no-op mode)
    pub(crate) connection: Option<MultiplexedConnection>,
    pub(crate) config: RedisConfig,
    /// Whether this is a no-op pool (Redis unavailable)
    pub(crate) noop_mode: bool,
}

/// Redis connection wrapper
pub struct RedisConnection {
    pub(crate) conn: Option<MultiplexedConnection>,
}

impl RedisPool {
    /// Connect to Redis
    pub async fn new(config: &RedisConfig) -> Result<Self> {
        info!("Creating Redis connection");
        debug!("Redis URL: {}", Self::sanitize_url(&config.url));

        let client = Client::open(config.url.as_str()).map_err(CheckError::Redis)?;

        let connection = tokio::time::timeout(
            config.connection_timeout(),
            client.get_multiplexed_async_connection(),
        )
        .await
        .map_err(|_| {
            CheckError::timeout(format!(
                "Redis connection timed out after {}s",
                config.connection_timeout
            ))
        })?
        .map_err(CheckError::Redis)?;

        info!("Redis connection created successfully");
        Ok(Self {
            client: Some(client),
            connection: Some(connection),
            config: config.clone(),
            noop_mode: false,
        })
    }

    /// Connect to Redis, degrading to a no-op pool when it cannot be reached
    pub async fn connect_or_noop(config: &RedisConfig) -> Self {
        match Self::new(config).await {
            Ok(pool) => pool,
            Err(e) => {
                warn!(
                    "Redis unavailable at {} ({}), continuing without cache",
                    Self::sanitize_url(&config.url),
                    e
                );
                Self::create_noop()
            }
        }
    }

    /// Create a no-op Redis pool (for when Redis is unavailable)
    pub fn create_noop() -> Self {
        info!("Creating no-op Redis pool (Redis unavailable)");
        Self {
            client: None,
            connection: None,
            config: RedisConfig {
                url: String::new(),
                connection_timeout: 0,
            },
            noop_mode: true,
        }
    }

    /// Check if this is a no-op pool
    pub fn is_noop(&self) -> bool {
        self.noop_mode
    }

    /// Get a handle on the shared connection
    pub fn get_connection(&self) -> RedisConnection {
        RedisConnection {
            conn: self.connection.clone(),
        }
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        if self.noop_mode {
            debug!("Redis health check skipped (no-op mode)");
            return Ok(());
        }

        let mut conn = self.get_connection();
        if let Some(ref mut c) = conn.conn {
            let _: String = redis::cmd("PING")
                .query_async(c)
                .await
                .map_err(CheckError::Redis)?;
        }

        debug!("Redis health check passed");
        Ok(())
    }

    /// Sanitize Redis URL for logging (hide password)
    pub(crate) fn sanitize_url(url: &str) -> String {
        if let Ok(parsed) = url::Url::parse(url) {
            let mut sanitized = parsed.clone();
            if sanitized.password().is_some() {
                let _ = sanitized.set_password(Some("***"));
            }
            sanitized.to_string()
        } else {
            "invalid_url".to_string()
        }
    }
}

impl std::fmt::Debug for RedisPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisPool")
            .field("url", &Self::sanitize_url(&self.config.url))
            .field("noop_mode", &self.noop_mode)
            .finish()
    }
}
