// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Client-side data coordination for Bookit.
//!
//! Every read is cached under a hierarchical [`QueryKey`] and served from
//! memory while fresh. Every write names the keys it makes stale, and the
//! [`QueryClient`] invalidates them before returning. Failed requests are
//! retried per [`RetryPolicy`], and observed data is refetched when the app
//! returns to the foreground or regains connectivity.

mod cache;
mod client;
mod config;
mod error;
mod keys;
mod mutation;
mod resync;
mod retry;

#[cfg(test)]
mod tests;

pub use cache::{CacheSnapshot, FetchResult, Fetcher, Observer, ObserverId, QueryCache};
pub use client::{QueryClient, decode};
pub use config::{ClientConfig, DEFAULT_STALE_TIME_MS};
pub use error::{CoreError, ErrorKind, RequestError, SESSION_EXPIRED_CODES};
pub use keys::{Entity, KeySegment, QueryKey, key_for};
pub use mutation::{MutationRequest, Operation};
pub use resync::{AppState, Connectivity, ResyncMonitor, ResyncReport, ResyncTrigger};
pub use retry::{RequestKind, RetryDecision, RetryPolicy, is_retryable_status, should_retry};
