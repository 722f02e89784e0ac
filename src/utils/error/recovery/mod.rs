//! Error recovery utilities
//!
//! Bounded retry with exponential backoff for transient upstream failures.

mod retry;
mod types;

pub use retry::RetryPolicy;
pub use types::RetryConfig;
