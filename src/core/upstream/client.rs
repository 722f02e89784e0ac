//! HTTP client for the `videos.list` endpoint

use super::error::{LookupError, UpstreamErrorMapper};
use super::models::VideoListResponse;
use crate::config::UpstreamConfig;
use crate::core::traits::UpstreamLookup;
use crate::core::types::{ChunkOutcome, FoundVideos};
use crate::utils::error::recovery::{RetryConfig, RetryPolicy};
use crate::utils::error::{CheckError, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use std::fmt;
use tracing::{debug, warn};

/// Upstream client issuing one `videos.list` call per chunk
#[derive(Clone)]
pub struct HttpUpstreamClient {
    client: Client,
    videos_url: String,
    api_key: String,
    retry: RetryPolicy,
    mapper: UpstreamErrorMapper,
}

impl HttpUpstreamClient {
    /// Build the client once; it is shared by every batch
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(config.timeout())
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| CheckError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(client, config))
    }

    /// Use an existing reqwest client
    pub fn with_client(client: Client, config: &UpstreamConfig) -> Self {
        let retry = RetryPolicy::new(RetryConfig {
            max_attempts: config.max_retries.saturating_add(1),
            base_delay: config.base_delay(),
            max_delay: config.max_delay(),
            backoff_multiplier: config.backoff_multiplier,
            jitter: true,
        });

        Self {
            client,
            videos_url: format!("{}/videos", config.base_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
            retry,
            mapper: UpstreamErrorMapper,
        }
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    async fn fetch(&self, chunk: &[String]) -> std::result::Result<FoundVideos, LookupError> {
        let ids = chunk.join(",");
        let mut query = vec![("part", "snippet"), ("id", ids.as_str())];
        if !self.api_key.is_empty() {
            query.push(("key", self.api_key.as_str()));
        }

        let response = self
            .client
            .get(&self.videos_url)
            .query(&query)
            .send()
            .await
            .map_err(LookupError::from_reqwest)?;

        let status = response.status();
        let body = response.text().await.map_err(LookupError::from_reqwest)?;

        if !status.is_success() {
            return Err(self.mapper.map_http_error(status.as_u16(), &body));
        }

        let parsed: VideoListResponse =
            serde_json::from_str(&body).map_err(|e| LookupError::schema(e.to_string()))?;
        Ok(parsed.into_found(chunk))
    }
}

#[async_trait]
impl UpstreamLookup for HttpUpstreamClient {
    async fn lookup(&self, chunk: &[String]) -> ChunkOutcome {
        if chunk.is_empty() {
            return ChunkOutcome::Success(FoundVideos::new());
        }

        match self
            .retry
            .call_if(|| self.fetch(chunk), LookupError::is_retryable)
            .await
        {
            Ok(found) => {
                debug!("Upstream found {} of {} ids", found.len(), chunk.len());
                ChunkOutcome::Success(found)
            }
            Err(e) if e.is_quota() => {
                warn!("Upstream quota exhausted: {}", e);
                e.into_outcome()
            }
            Err(e) => {
                warn!("Upstream lookup of {} ids failed: {}", chunk.len(), e);
                e.into_outcome()
            }
        }
    }
}

impl fmt::Debug for HttpUpstreamClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpUpstreamClient")
            .field("videos_url", &self.videos_url)
            .field("api_key", &"***")
            .field("retry", &self.retry)
            .finish()
    }
}
