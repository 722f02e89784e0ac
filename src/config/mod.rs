//! Configuration management
//!
//! Configuration comes from an optional YAML file overlaid with environment
//! variables, and is validated once before anything is built from it.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{CheckError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Upstream lookup service
    #[serde(default)]
    pub upstream: UpstreamConfig,
    /// Existence cache
    #[serde(default)]
    pub cache: CacheConfig,
    /// Cache backends
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from a YAML file
    ///
    /// The result is not validated, so secrets may still be supplied through
    /// the environment. Use [`Config::load`] for the full pipeline.
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CheckError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| CheckError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// File (when given), then environment overrides, then validation
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path).await?,
            None => Self::default(),
        };
        config.apply_env()?;
        config.validate()?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.upstream
            .validate()
            .map_err(|e| CheckError::Config(format!("Upstream config error: {}", e)))?;

        self.cache
            .validate()
            .map_err(|e| CheckError::Config(format!("Cache config error: {}", e)))?;

        self.storage
            .validate()
            .map_err(|e| CheckError::Config(format!("Storage config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| CheckError::Config(format!("Logging config error: {}", e)))?;

        #[cfg(not(feature = "redis"))]
        if self.cache.enabled && self.cache.backend == CacheBackend::Redis {
            return Err(CheckError::Config(
                "Cache backend 'redis' requires the `redis` feature".to_string(),
            ));
        }

        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| CheckError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
