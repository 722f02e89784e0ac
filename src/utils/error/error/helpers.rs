//! Helper functions for creating specific error types

use super::types::CheckError;

impl CheckError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn quota_exceeded<S: Into<String>>(message: S) -> Self {
        Self::QuotaExceeded(message.into())
    }

    pub fn cache<S: Into<String>>(message: S) -> Self {
        Self::Cache(message.into())
    }

    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::Upstream(message.into())
    }

    pub fn timeout<S: Into<String>>(message: S) -> Self {
        Self::Timeout(message.into())
    }

    pub fn invalid_request<S: Into<String>>(message: S) -> Self {
        Self::InvalidRequest(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}

impl CheckError {
    /// Whether this is the quota signal callers should surface as "try again later"
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, Self::QuotaExceeded(_))
    }

    /// Process exit code used by the command line front end
    pub fn exit_code(&self) -> u8 {
        if self.is_quota_exceeded() { 2 } else { 1 }
    }
}
