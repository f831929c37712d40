// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Retry and backoff policy.
//!
//! A failed request is retried only when the server is at fault (5xx) or
//! asked the client to slow down (408, 429). Every other client error and
//! every network failure is terminal immediately, so the user is prompted
//! instead of left waiting.
//!
//! `attempt` counts retries already performed: the first failure is
//! evaluated with `attempt == 0` and waits `base_delay`.

use crate::error::{ErrorKind, RequestError};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Whether a request reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    /// A cached read.
    Query,
    /// A write.
    Mutation,
}

/// Outcome of evaluating a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Try again after `delay`.
    Retry {
        /// Time to wait before the next attempt.
        delay: Duration,
    },
    /// Surface the error.
    GiveUp,
}

/// Retry limits and backoff bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Retries allowed for queries.
    pub max_query_retries: u32,
    /// Retries allowed for mutations.
    pub max_mutation_retries: u32,
    /// Delay before the first retry, in milliseconds.
    pub base_delay_ms: u64,
    /// Upper bound of any delay, in milliseconds.
    pub max_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_query_retries: 3,
            max_mutation_retries: 1,
            base_delay_ms: 1_000,
            max_delay_ms: 30_000,
        }
    }
}

/// Returns whether a status is worth retrying at all.
///
/// True for 5xx, 408 and 429. False for status 0 and every other status.
#[must_use]
pub const fn is_retryable_status(status: u16) -> bool {
    matches!(status, 408 | 429 | 500..=599)
}

/// Query retry decision under the default policy.
#[must_use]
pub fn should_retry(attempt: u32, status: u16) -> bool {
    let policy: RetryPolicy = RetryPolicy::default();
    is_retryable_status(status) && attempt < policy.max_query_retries
}

impl RetryPolicy {
    /// Returns the retry budget for a request kind.
    #[must_use]
    pub const fn max_retries(&self, kind: RequestKind) -> u32 {
        match kind {
            RequestKind::Query => self.max_query_retries,
            RequestKind::Mutation => self.max_mutation_retries,
        }
    }

    /// Returns `min(base * 2^attempt, max)`.
    #[must_use]
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor: u64 = 2u64.checked_pow(attempt).unwrap_or(u64::MAX);
        Duration::from_millis(self.base_delay_ms.saturating_mul(factor).min(self.max_delay_ms))
    }

    /// Decides what to do after a failure.
    #[must_use]
    pub fn decide(&self, kind: RequestKind, attempt: u32, error: &RequestError) -> RetryDecision {
        let retryable: bool = match error.classify() {
            ErrorKind::Server(_) => true,
            ErrorKind::Client(status) => is_retryable_status(status),
            ErrorKind::Network | ErrorKind::SessionExpired => false,
        };
        if retryable && attempt < self.max_retries(kind) {
            RetryDecision::Retry {
                delay: self.backoff(attempt),
            }
        } else {
            RetryDecision::GiveUp
        }
    }

    /// Runs `op` until it succeeds or the policy gives up.
    ///
    /// # Errors
    ///
    /// Returns the last error once no further retry is allowed.
    pub async fn run<T, F, Fut>(
        &self,
        kind: RequestKind,
        label: &str,
        mut op: F,
    ) -> Result<T, RequestError>
    where
        T: Send,
        F: FnMut() -> Fut + Send,
        Fut: Future<Output = Result<T, RequestError>> + Send,
    {
        let mut attempt: u32 = 0;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(error) => match self.decide(kind, attempt, &error) {
                    RetryDecision::Retry { delay } => {
                        debug!(
                            request = label,
                            attempt,
                            status = error.status,
                            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                            "Retrying failed request"
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                    }
                    RetryDecision::GiveUp => {
                        warn!(
                            request = label,
                            attempt,
                            status = error.status,
                            "Request failed: {}",
                            error.message
                        );
                        return Err(error);
                    }
                },
            }
        }
    }
}
