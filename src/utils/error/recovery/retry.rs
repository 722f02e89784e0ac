//! Retry mechanism with exponential backoff

use super::types::RetryConfig;
use std::time::Duration;
use tracing::{debug, warn};

/// Retry mechanism with exponential backoff
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    config: RetryConfig,
}

impl RetryPolicy {
    /// Create a new retry policy
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    /// Get current configuration
    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Execute a function, retrying every failure until attempts run out
    pub async fn call<F, Fut, R, E>(&self, f: F) -> std::result::Result<R, E>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = std::result::Result<R, E>>,
        E: std::fmt::Display,
    {
        self.call_if(f, |_| true).await
    }

    /// Execute a function, retrying only failures accepted by `should_retry`
    ///
    /// A rejected failure is returned immediately without sleeping.
    pub async fn call_if<F, Fut, R, E, P>(
        &self,
        mut f: F,
        should_retry: P,
    ) -> std::result::Result<R, E>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = std::result::Result<R, E>>,
        E: std::fmt::Display,
        P: Fn(&E) -> bool,
    {
        let mut attempt = 0;

        loop {
            attempt += 1;

            match f().await {
                Ok(result) => {
                    if attempt > 1 {
                        debug!("Retry succeeded on attempt {}", attempt);
                    }
                    return Ok(result);
                }
                Err(error) => {
                    if !should_retry(&error) {
                        debug!("Attempt {} failed with non-retryable error: {}", attempt, error);
                        return Err(error);
                    }
                    if attempt >= self.config.max_attempts {
                        warn!("Giving up after {} attempts: {}", attempt, error);
                        return Err(error);
                    }

                    let delay = self.jittered(self.config.delay_for_attempt(attempt));
                    debug!(
                        "Attempt {} failed: {}, retrying in {:?}",
                        attempt, error, delay
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    fn jittered(&self, delay: Duration) -> Duration {
        if !self.config.jitter || delay.is_zero() {
            return delay;
        }
        // +/- 10%
        let jitter_factor = 0.1;
        let millis = delay.as_millis() as f64;
        let offset = millis * jitter_factor * (rand::random::<f64>() - 0.5) * 2.0;
        Duration::from_millis((millis + offset).max(0.0) as u64)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(RetryConfig::default())
    }
}
