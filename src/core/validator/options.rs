//! Batch validator options

use crate::config::{Config, MAX_IDS_PER_CALL};

/// Tuning for a [`super::BatchValidator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    /// Identifiers per upstream call
    pub chunk_size: usize,
    /// Chunks in flight at once
    pub concurrency: usize,
    /// Cache the fail-open negatives of failed chunks
    pub cache_failed_chunks: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            chunk_size: MAX_IDS_PER_CALL,
            concurrency: 4,
            cache_failed_chunks: false,
        }
    }
}

impl BatchOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            chunk_size: config.upstream.max_ids_per_call,
            concurrency: config.upstream.concurrency,
            cache_failed_chunks: config.cache.cache_failed_chunks,
        }
    }

    /// Set the chunk size, capped at the upstream per-call limit
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.clamp(1, MAX_IDS_PER_CALL);
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_cache_failed_chunks(mut self, enabled: bool) -> Self {
        self.cache_failed_chunks = enabled;
        self
    }
}
