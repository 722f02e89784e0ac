//! Error types for the validator

use thiserror::Error;

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, CheckError>;

/// Main error type
///
/// Only [`CheckError::QuotaExceeded`] ever escapes a batch validation call.
/// The other variants come from start-up paths (configuration, backend
/// connections) and from the individual building blocks.
#[derive(Error, Debug)]
pub enum CheckError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Redis errors
    #[cfg(feature = "redis")]
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The upstream metered quota is exhausted; retry after it replenishes
    #[error("Upstream quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Cache backend errors
    #[error("Cache error: {0}")]
    Cache(String),

    /// Upstream service errors
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Timeout errors
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Invalid request errors
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
