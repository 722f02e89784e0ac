//! Upstream failure classification

use super::models::{ApiError, ApiErrorBody};
use crate::core::types::{ChunkOutcome, FailureReason};
use thiserror::Error;

/// Reasons that mean the metered daily quota is spent
const QUOTA_REASONS: &[&str] = &["quotaExceeded", "dailyLimitExceeded", "dailyLimitExceededUnreg"];
const QUOTA_DOMAIN: &str = "youtube.quota";
/// Reasons for short-term throttling, which clears on its own
const RATE_LIMIT_REASONS: &[&str] = &["rateLimitExceeded", "userRateLimitExceeded"];

/// Longest upstream message carried into an error
const MAX_MESSAGE_LEN: usize = 256;

/// Why a single upstream call failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Quota exceeded: {message}")]
    QuotaExceeded { message: String },

    #[error("Rate limited ({status}): {message}")]
    RateLimited { status: u16, message: String },

    #[error("Upstream server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Unexpected response body: {message}")]
    Schema { message: String },
}

impl LookupError {
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }

    /// Classify a transport-level failure
    ///
    /// The request URL carries the API key, so it is stripped from the message.
    pub fn from_reqwest(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_decode() {
            Self::schema(error.without_url().to_string())
        } else {
            Self::Network {
                message: error.without_url().to_string(),
            }
        }
    }

    /// Check if this error is worth another attempt
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited { .. } | Self::Server { .. } | Self::Timeout | Self::Network { .. }
        )
    }

    pub fn is_quota(&self) -> bool {
        matches!(self, Self::QuotaExceeded { .. })
    }

    /// Fail-open reason, `None` for quota exhaustion
    pub fn reason(&self) -> Option<FailureReason> {
        match self {
            Self::QuotaExceeded { .. } => None,
            Self::RateLimited { .. } => Some(FailureReason::RateLimited),
            Self::Server { .. } => Some(FailureReason::Server),
            Self::Rejected { .. } => Some(FailureReason::Rejected),
            Self::Timeout => Some(FailureReason::Timeout),
            Self::Network { .. } => Some(FailureReason::Network),
            Self::Schema { .. } => Some(FailureReason::Schema),
        }
    }

    pub fn into_outcome(self) -> ChunkOutcome {
        match self.reason() {
            Some(reason) => ChunkOutcome::TransientFailure { reason },
            None => ChunkOutcome::QuotaExceeded,
        }
    }
}

/// Maps non-success HTTP responses to [`LookupError`]
#[derive(Debug, Clone, Copy, Default)]
pub struct UpstreamErrorMapper;

impl UpstreamErrorMapper {
    pub fn map_http_error(&self, status_code: u16, response_body: &str) -> LookupError {
        let body = serde_json::from_str::<ApiError>(response_body)
            .map(|parsed| parsed.error)
            .unwrap_or_default();
        let message = error_message(&body, response_body);

        if body.has_reason(QUOTA_REASONS) || body.has_domain(QUOTA_DOMAIN) {
            return LookupError::QuotaExceeded { message };
        }

        match status_code {
            429 => LookupError::RateLimited {
                status: status_code,
                message,
            },
            _ if body.has_reason(RATE_LIMIT_REASONS) => LookupError::RateLimited {
                status: status_code,
                message,
            },
            408 | 500..=599 => LookupError::Server {
                status: status_code,
                message,
            },
            _ => LookupError::Rejected {
                status: status_code,
                message,
            },
        }
    }
}

fn error_message(body: &ApiErrorBody, raw: &str) -> String {
    let message = body
        .message
        .clone()
        .or_else(|| body.errors.iter().find_map(|d| d.message.clone()))
        .unwrap_or_else(|| raw.trim().to_string());

    if message.is_empty() {
        return "no error message".to_string();
    }
    match message.char_indices().nth(MAX_MESSAGE_LEN) {
        Some((cut, _)) => format!("{}...", &message[..cut]),
        None => message,
    }
}
