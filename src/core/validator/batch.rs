//! Batch validation pipeline

use super::options::BatchOptions;
use crate::config::Config;
use crate::core::cache_resolver::{CacheResolver, ResolverStats};
use crate::core::chunker::{chunk, dedupe};
use crate::core::merger::{merge, resolve_chunk};
use crate::core::traits::UpstreamLookup;
use crate::core::types::{BatchReport, ChunkOutcome, ResultMap};
use crate::core::upstream::HttpUpstreamClient;
use crate::utils::error::{CheckError, Result};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

/// Validates identifiers against the cache and the upstream service
///
/// Collaborators are built once and injected, so one validator serves every
/// batch of the process.
pub struct BatchValidator {
    upstream: Arc<dyn UpstreamLookup>,
    resolver: CacheResolver,
    options: BatchOptions,
}

impl BatchValidator {
    pub fn new(
        upstream: Arc<dyn UpstreamLookup>,
        resolver: CacheResolver,
        options: BatchOptions,
    ) -> Self {
        let options = options
            .with_chunk_size(options.chunk_size)
            .with_concurrency(options.concurrency);
        Self {
            upstream,
            resolver,
            options,
        }
    }

    /// Build the HTTP client and cache backend from configuration
    pub async fn from_config(config: &Config) -> Result<Self> {
        let upstream = HttpUpstreamClient::new(&config.upstream)?;
        let resolver = CacheResolver::from_config(&config.cache, &config.storage).await;
        info!(
            "Batch validator ready (chunk size {}, concurrency {}, cache {:?})",
            config.upstream.max_ids_per_call, config.upstream.concurrency, config.cache.backend
        );
        Ok(Self::new(
            Arc::new(upstream),
            resolver,
            BatchOptions::from_config(config),
        ))
    }

    pub fn options(&self) -> &BatchOptions {
        &self.options
    }

    pub fn resolver(&self) -> &CacheResolver {
        &self.resolver
    }

    pub fn cache_stats(&self) -> ResolverStats {
        self.resolver.stats()
    }

    /// Validate identifiers, one result per distinct identifier
    ///
    /// Fails only when the upstream quota is exhausted; every other failure
    /// resolves the affected identifiers to `exists = false`.
    pub async fn validate<I, S>(&self, identifiers: I) -> Result<ResultMap>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.validate_with_report(identifiers)
            .await
            .map(|(results, _)| results)
    }

    /// Like [`validate`](Self::validate), also returning what the call did
    pub async fn validate_with_report<I, S>(&self, identifiers: I) -> Result<(ResultMap, BatchReport)>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let identifiers: Vec<String> = identifiers.into_iter().map(Into::into).collect();
        let span = info_span!("validate_batch", batch_id = %Uuid::new_v4());
        self.run(identifiers).instrument(span).await
    }

    async fn run(&self, identifiers: Vec<String>) -> Result<(ResultMap, BatchReport)> {
        let mut report = BatchReport {
            requested: identifiers.len(),
            ..BatchReport::default()
        };

        let unique = dedupe(identifiers);
        report.unique = unique.len();
        if unique.is_empty() {
            debug!("Empty batch, nothing to validate");
            return Ok((ResultMap::new(), report));
        }

        let (hits, misses) = self.resolver.resolve(&unique).await;
        report.cache_hits = hits.len();
        if misses.is_empty() {
            info!("Batch of {} ids served from cache", report.unique);
            return Ok((hits, report));
        }

        let chunks = chunk(&misses, self.options.chunk_size);
        let outcomes = self.dispatch(&chunks).await;

        let mut completed: Vec<(&[String], ChunkOutcome)> = Vec::with_capacity(outcomes.len());
        let mut quota_exceeded = false;
        for (index, outcome) in outcomes {
            let Some(outcome) = outcome else {
                report.skipped_chunks += 1;
                continue;
            };
            report.upstream_calls += 1;
            match &outcome {
                ChunkOutcome::Success(_) => {}
                ChunkOutcome::QuotaExceeded => quota_exceeded = true,
                ChunkOutcome::TransientFailure { reason } => {
                    report.failed_chunks += 1;
                    warn!(
                        "Chunk {} of {} failed open ({}), {} ids resolved as missing",
                        index + 1,
                        chunks.len(),
                        reason,
                        chunks[index].len()
                    );
                }
            }
            completed.push((chunks[index].as_slice(), outcome));
        }

        if quota_exceeded {
            warn!(
                "Quota exhausted after {} upstream calls, {} chunks skipped",
                report.upstream_calls, report.skipped_chunks
            );
            return Err(CheckError::quota_exceeded(format!(
                "upstream quota exhausted after {} of {} chunks",
                report.upstream_calls,
                chunks.len()
            )));
        }

        let results = merge(
            hits,
            completed.iter().map(|(chunk, outcome)| (*chunk, outcome)),
        );
        info!(
            "Validated {} ids ({} cached, {} upstream calls, {} failed chunks)",
            report.unique, report.cache_hits, report.upstream_calls, report.failed_chunks
        );
        Ok((results, report))
    }

    /// Run every chunk through the upstream with bounded concurrency
    ///
    /// Each chunk is written to the cache as soon as it is classified, so a
    /// caller that drops the batch midway keeps what was already paid for.
    /// Returns `(chunk index, outcome)`; the outcome is `None` for chunks that
    /// were never dispatched because a quota signal had already been raised.
    async fn dispatch(&self, chunks: &[Vec<String>]) -> Vec<(usize, Option<ChunkOutcome>)> {
        let quota_flag = AtomicBool::new(false);
        let quota_flag = &quota_flag;
        let total = chunks.len();

        stream::iter(chunks.iter().enumerate())
            .map(move |(index, ids)| async move {
                if quota_flag.load(Ordering::Acquire) {
                    debug!("Skipping chunk {} of {} after quota signal", index + 1, total);
                    return (index, None);
                }

                let outcome = self.upstream.lookup(ids).await;
                if outcome.is_quota_exceeded() {
                    quota_flag.store(true, Ordering::Release);
                }
                self.write_through(ids, &outcome).await;
                (index, Some(outcome))
            })
            .buffer_unordered(self.options.concurrency)
            .collect()
            .await
    }

    async fn write_through(&self, ids: &[String], outcome: &ChunkOutcome) {
        let cacheable = match outcome {
            ChunkOutcome::Success(_) => true,
            ChunkOutcome::TransientFailure { .. } => self.options.cache_failed_chunks,
            ChunkOutcome::QuotaExceeded => false,
        };
        if cacheable {
            self.resolver.store_many(&resolve_chunk(ids, outcome)).await;
        }
    }
}

impl std::fmt::Debug for BatchValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchValidator")
            .field("resolver", &self.resolver)
            .field("options", &self.options)
            .finish()
    }
}
