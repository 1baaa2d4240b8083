//! Optional retry helper.
//!
//! [`crate::SaavnApi`] never retries on its own. Callers that want to ride out
//! flaky connectivity can wrap the inner [`Result`]-returning work in
//! [`retry_with_backoff`]. Only [`ErrorKind::Network`] failures are retried;
//! upstream rejections and bad input fail on the first attempt.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::error::{ErrorKind, Result, SaavnError};

/// How many times to try and how long to wait between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    /// Delay before the second attempt; grows linearly with each attempt.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }
}

/// Retry an async operation with linear backoff.
///
/// Calls `f` up to `policy.max_attempts` times, sleeping
/// `base_delay * attempt` after each retryable failure. Returns the first
/// success, the first non-network error, or the last network error.
pub async fn retry_with_backoff<F, Fut, T>(policy: RetryPolicy, label: &str, f: F) -> Result<T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        let err: SaavnError = match f().await {
            Ok(result) => return Ok(result),
            Err(e) => e,
        };

        if err.kind() != ErrorKind::Network {
            return Err(err);
        }

        if attempt >= max_attempts {
            warn!("{} failed after {} attempts", label, max_attempts);
            return Err(err.with_context("attempts", max_attempts));
        }

        warn!(
            "{} failed (attempt {}/{}): {}",
            label, attempt, max_attempts, err
        );
        tokio::time::sleep(policy.base_delay * attempt).await;
        attempt += 1;
    }
}
