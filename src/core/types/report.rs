//! Accounting for a single validation call

use serde::Serialize;

/// What a validation call did to produce its result map
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Identifiers supplied by the caller, duplicates included
    pub requested: usize,
    /// Distinct identifiers
    pub unique: usize,
    /// Identifiers answered from the cache
    pub cache_hits: usize,
    /// Upstream calls issued (one per dispatched chunk)
    pub upstream_calls: usize,
    /// Chunks that failed open
    pub failed_chunks: usize,
    /// Chunks never dispatched because the quota signal was already raised
    pub skipped_chunks: usize,
}

impl BatchReport {
    /// Identifiers that needed an upstream lookup
    pub fn cache_misses(&self) -> usize {
        self.unique.saturating_sub(self.cache_hits)
    }
}
