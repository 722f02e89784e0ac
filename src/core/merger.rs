//! Pure merging of cache hits and chunk outcomes

use crate::core::types::{ChunkOutcome, ExistenceResult, ResultMap};

/// Turn one chunk's outcome into a result for every identifier in the chunk
///
/// Identifiers absent from a successful response, and every identifier of a
/// failed chunk, become `exists = false`. Response entries that were not
/// requested are ignored.
pub fn resolve_chunk(chunk: &[String], outcome: &ChunkOutcome) -> Vec<ExistenceResult> {
    chunk
        .iter()
        .map(|id| match outcome {
            ChunkOutcome::Success(found) => match found.get(id) {
                Some(meta) => ExistenceResult::found(id.clone(), &meta.title, &meta.channel),
                None => ExistenceResult::missing(id.clone()),
            },
            ChunkOutcome::QuotaExceeded | ChunkOutcome::TransientFailure { .. } => {
                ExistenceResult::missing(id.clone())
            }
        })
        .collect()
}

/// Combine cache hits with resolved chunks into the final map
pub fn merge<'a, I>(hits: ResultMap, chunks: I) -> ResultMap
where
    I: IntoIterator<Item = (&'a [String], &'a ChunkOutcome)>,
{
    let mut merged = hits;
    for (chunk, outcome) in chunks {
        for result in resolve_chunk(chunk, outcome) {
            merged.insert(result);
        }
    }
    merged
}
