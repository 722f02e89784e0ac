//! Per-chunk upstream outcomes

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Metadata the upstream returns for an existing video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub title: String,
    pub channel: String,
}

impl VideoMetadata {
    pub fn new(title: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            channel: channel.into(),
        }
    }
}

/// Identifiers found in a chunk, with their metadata
pub type FoundVideos = HashMap<String, VideoMetadata>;

/// Why a chunk could not be resolved
///
/// Every reason is fail-open: the chunk's identifiers resolve to
/// `exists = false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// Connection or transport failure
    Network,
    /// The call exceeded its timeout
    Timeout,
    /// Short-term rate limiting (not the metered quota)
    RateLimited,
    /// Upstream 5xx
    Server,
    /// Upstream refused the request (4xx other than quota)
    Rejected,
    /// The response body did not match the expected shape
    Schema,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Network => "network",
            Self::Timeout => "timeout",
            Self::RateLimited => "rate_limited",
            Self::Server => "server",
            Self::Rejected => "rejected",
            Self::Schema => "schema",
        };
        f.write_str(name)
    }
}

/// Result of one upstream call for one chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkOutcome {
    /// The call succeeded; requested identifiers absent from the map do not exist
    Success(FoundVideos),
    /// The metered quota is exhausted; nothing in the chunk was resolved
    QuotaExceeded,
    /// The call failed for a non-quota reason; nothing in the chunk was resolved
    TransientFailure { reason: FailureReason },
}

impl ChunkOutcome {
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, Self::QuotaExceeded)
    }
}
