//! Upstream lookup service trait

use crate::core::types::ChunkOutcome;
use async_trait::async_trait;

/// Resolves one chunk of identifiers with one upstream call
///
/// Transient failures may be retried a bounded number of times; a quota
/// signal never is.
///
/// Implementations classify every failure into the outcome instead of
/// returning an error, so the caller only has to tell quota exhaustion apart
/// from everything else.
#[async_trait]
pub trait UpstreamLookup: Send + Sync {
    async fn lookup(&self, chunk: &[String]) -> ChunkOutcome;
}
