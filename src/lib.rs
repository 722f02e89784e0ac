//! # vidcheck
//!
//! Quota-aware batch existence validation for video identifiers.
//!
//! Validating a large identifier list against a metered lookup API is
//! expensive: every call costs quota and the daily budget is small. This crate
//! validates in batches and keeps the bill down:
//!
//! - **Dedupe**: each distinct identifier is looked up at most once per call
//! - **Tiered caching**: existing videos are cached for weeks, missing ones for
//!   about a day with jitter, in memory or in Redis
//! - **Chunking**: cache misses go upstream in chunks of up to 50 ids, one
//!   quota unit per chunk
//! - **Bounded fan-out**: chunks run concurrently with a shared quota flag;
//!   once the quota is exhausted no further chunk is dispatched
//! - **Fail-open**: network, timeout and schema failures resolve the affected
//!   identifiers to "does not exist" instead of failing the batch
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vidcheck::{BatchValidator, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let validator = BatchValidator::from_config(&config).await?;
//!
//!     let results = validator.validate(["dQw4w9WgXcQ", "not-a-video"]).await?;
//!     for (id, result) in &results {
//!         println!("{}: {} ({})", id, result.exists(), result.title());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Custom collaborators
//!
//! The validator takes its upstream client and cache resolver by injection, so
//! tests and embedders can substitute either:
//!
//! ```rust
//! use std::sync::Arc;
//! use vidcheck::core::cache_resolver::{CacheKeyBuilder, TtlPolicy};
//! use vidcheck::storage::MemoryStore;
//! use vidcheck::{BatchOptions, CacheResolver};
//!
//! let resolver = CacheResolver::new(
//!     Arc::new(MemoryStore::new(10_000)),
//!     CacheKeyBuilder::new("existence-cache", "v1"),
//!     TtlPolicy::default(),
//! );
//! let options = BatchOptions::default().with_concurrency(2);
//! # let _ = (resolver, options);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{CheckError, Result};

pub use core::cache_resolver::{CacheResolver, ResolverStats};
pub use core::traits::{ExistenceStore, UpstreamLookup};
pub use core::types::{
    BatchReport, ChunkOutcome, ExistenceResult, FailureReason, FoundVideos, ResultMap,
    VideoMetadata,
};
pub use core::upstream::{HttpUpstreamClient, LookupError};
pub use core::validator::{BatchOptions, BatchValidator};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone, serde::Serialize)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build time, seconds since the Unix epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
