//! Environment variable overrides

use super::Config;
use crate::utils::error::{CheckError, Result};
use std::env;
use std::str::FromStr;
use tracing::debug;

pub const ENV_API_KEY: &str = "VIDCHECK_API_KEY";
pub const ENV_UPSTREAM_URL: &str = "VIDCHECK_UPSTREAM_URL";
pub const ENV_MAX_IDS_PER_CALL: &str = "VIDCHECK_MAX_IDS_PER_CALL";
pub const ENV_TIMEOUT: &str = "VIDCHECK_TIMEOUT";
pub const ENV_MAX_RETRIES: &str = "VIDCHECK_MAX_RETRIES";
pub const ENV_CONCURRENCY: &str = "VIDCHECK_CONCURRENCY";
pub const ENV_CACHE_BACKEND: &str = "VIDCHECK_CACHE_BACKEND";
pub const ENV_POSITIVE_TTL_DAYS: &str = "VIDCHECK_POSITIVE_TTL_DAYS";
pub const ENV_NEGATIVE_TTL_DAYS: &str = "VIDCHECK_NEGATIVE_TTL_DAYS";
pub const ENV_NEGATIVE_JITTER_HOURS: &str = "VIDCHECK_NEGATIVE_JITTER_HOURS";
pub const ENV_REDIS_URL: &str = "REDIS_URL";
pub const ENV_LOG_LEVEL: &str = "VIDCHECK_LOG_LEVEL";
pub const ENV_LOG_JSON: &str = "VIDCHECK_LOG_JSON";

impl Config {
    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_with(|name| env::var(name).ok())
    }

    /// Apply overrides from any variable lookup
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_API_KEY) {
            self.upstream.api_key = key;
        }
        if let Some(url) = lookup(ENV_UPSTREAM_URL) {
            self.upstream.base_url = url;
        }
        if let Some(value) = lookup(ENV_MAX_IDS_PER_CALL) {
            self.upstream.max_ids_per_call = parse_var(ENV_MAX_IDS_PER_CALL, &value)?;
        }
        if let Some(value) = lookup(ENV_TIMEOUT) {
            self.upstream.timeout = parse_var(ENV_TIMEOUT, &value)?;
        }
        if let Some(value) = lookup(ENV_MAX_RETRIES) {
            self.upstream.max_retries = parse_var(ENV_MAX_RETRIES, &value)?;
        }
        if let Some(value) = lookup(ENV_CONCURRENCY) {
            self.upstream.concurrency = parse_var(ENV_CONCURRENCY, &value)?;
        }

        if let Some(value) = lookup(ENV_CACHE_BACKEND) {
            self.cache.backend = parse_var(ENV_CACHE_BACKEND, &value)?;
        }
        if let Some(value) = lookup(ENV_POSITIVE_TTL_DAYS) {
            self.cache.positive_ttl_days = parse_var(ENV_POSITIVE_TTL_DAYS, &value)?;
        }
        if let Some(value) = lookup(ENV_NEGATIVE_TTL_DAYS) {
            self.cache.negative_ttl_days = parse_var(ENV_NEGATIVE_TTL_DAYS, &value)?;
        }
        if let Some(value) = lookup(ENV_NEGATIVE_JITTER_HOURS) {
            self.cache.negative_jitter_hours = parse_var(ENV_NEGATIVE_JITTER_HOURS, &value)?;
        }

        if let Some(url) = lookup(ENV_REDIS_URL) {
            self.storage.redis.url = url;
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        if let Some(value) = lookup(ENV_LOG_JSON) {
            self.logging.json = parse_var(ENV_LOG_JSON, &value)?;
        }

        debug!("Environment overrides applied");
        Ok(())
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| CheckError::Config(format!("Invalid {}: {}", name, e)))
}
