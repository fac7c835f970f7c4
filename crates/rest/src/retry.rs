//! Retry decorator — exponential backoff over any transport.
//!
//! Retries only failures a repeat attempt could plausibly fix: network
//! errors, 429, and 5xx. Everything else (4xx rejections, decode failures)
//! propagates on the first attempt. The decorator sits entirely at the
//! transport boundary; resource managers are unaware of it.

use async_trait::async_trait;
use quill_core::error::RestError;
use quill_core::transport::{ApiRequest, ApiResponse, Transport};
use std::time::Duration;
use tracing::warn;

/// Backoff parameters for [`RetryTransport`].
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Retries after the initial attempt. 0 disables retrying.
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each subsequent one.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    /// The delay before retry number `attempt` (0-based).
    fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt)
    }
}

/// A transport that wraps another and retries transient failures.
pub struct RetryTransport<T> {
    inner: T,
    policy: RetryPolicy,
}

impl<T: Transport> RetryTransport<T> {
    pub fn new(inner: T, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

#[async_trait]
impl<T: Transport> Transport for RetryTransport<T> {
    fn name(&self) -> &str {
        "retry"
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, RestError> {
        let mut last_error;

        match self.inner.send(request.clone()).await {
            Ok(response) => return Ok(response),
            Err(e) if !e.is_transient() => return Err(e),
            Err(e) => last_error = e,
        }

        for attempt in 0..self.policy.max_retries {
            let delay = self.policy.delay_for(attempt);
            warn!(
                transport = self.inner.name(),
                attempt = attempt + 1,
                max = self.policy.max_retries,
                delay_ms = delay.as_millis() as u64,
                error = %last_error,
                "Transient failure, retrying"
            );
            tokio::time::sleep(delay).await;

            match self.inner.send(request.clone()).await {
                Ok(response) => return Ok(response),
                Err(e) if !e.is_transient() => return Err(e),
                Err(e) => last_error = e,
            }
        }

        Err(last_error)
    }
}
