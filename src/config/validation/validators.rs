//! Validators for each configuration section

use super::trait_def::Validate;
use crate::config::models::*;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl Validate for UpstreamConfig {
    fn validate(&self) -> Result<(), String> {
        let url = url::Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid base_url '{}': {}", self.base_url, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!("base_url must be http or https, got '{}'", url.scheme()));
        }

        if self.api_key.trim().is_empty() {
            return Err("API key is required".to_string());
        }

        if self.max_ids_per_call == 0 || self.max_ids_per_call > MAX_IDS_PER_CALL {
            return Err(format!(
                "max_ids_per_call must be between 1 and {}",
                MAX_IDS_PER_CALL
            ));
        }

        if self.timeout == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        if self.concurrency == 0 {
            return Err("Concurrency must be greater than 0".to_string());
        }

        if self.backoff_multiplier < 1.0 {
            return Err("Backoff multiplier must be at least 1.0".to_string());
        }

        if self.base_delay_ms > self.max_delay_ms {
            return Err("base_delay_ms must not exceed max_delay_ms".to_string());
        }

        Ok(())
    }
}

impl Validate for CacheConfig {
    fn validate(&self) -> Result<(), String> {
        if self.namespace.is_empty() {
            return Err("Cache namespace cannot be empty".to_string());
        }

        if self.version.is_empty() || self.version.contains(':') {
            return Err("Cache key version must be non-empty and contain no ':'".to_string());
        }

        if self.positive_ttl_days == 0 {
            return Err("Positive TTL must be greater than 0".to_string());
        }

        if self.negative_ttl_days == 0 {
            return Err("Negative TTL must be greater than 0".to_string());
        }

        if self.positive_ttl_days > MAX_TTL_DAYS
            || self.negative_ttl_days > MAX_TTL_DAYS
            || self.negative_jitter_hours > MAX_TTL_DAYS * 24
        {
            return Err(format!("Cache TTLs must not exceed {} days", MAX_TTL_DAYS));
        }

        let longest_negative = self
            .negative_ttl()
            .checked_add(self.negative_jitter())
            .ok_or_else(|| "Negative TTL plus jitter overflows".to_string())?;
        if longest_negative > self.positive_ttl() {
            return Err("Negative TTL plus jitter must not exceed the positive TTL".to_string());
        }

        if self.backend == CacheBackend::Memory && self.max_memory_entries == 0 {
            return Err("max_memory_entries must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for StorageConfig {
    fn validate(&self) -> Result<(), String> {
        self.redis.validate()
    }
}

impl Validate for RedisConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.url.starts_with("redis://") && !self.url.starts_with("rediss://") {
            return Err("Redis URL must start with redis:// or rediss://".to_string());
        }

        if self.connection_timeout == 0 {
            return Err("Redis connection timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if !LOG_LEVELS.contains(&self.level.to_ascii_lowercase().as_str()) {
            return Err(format!(
                "Unknown log level '{}', expected one of {}",
                self.level,
                LOG_LEVELS.join(", ")
            ));
        }
        Ok(())
    }
}
