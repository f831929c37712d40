// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{calls, counting, failing};
use crate::{
    ErrorKind, RequestError, RequestKind, RetryDecision, RetryPolicy, is_retryable_status,
    should_retry,
};
use futures::future::ready;
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[test]
fn test_should_retry_server_errors_up_to_three_times() {
    for status in [500u16, 502, 503, 599] {
        assert!(should_retry(0, status));
        assert!(should_retry(2, status));
        assert!(!should_retry(3, status));
    }
}

#[test]
fn test_should_retry_throttling_statuses() {
    assert!(should_retry(0, 408));
    assert!(should_retry(0, 429));
    assert!(!should_retry(3, 429));
}

#[test]
fn test_should_not_retry_other_client_errors_or_network() {
    for status in [0u16, 400, 401, 403, 404, 409, 422] {
        assert!(!should_retry(0, status), "status {status}");
    }
    assert!(!is_retryable_status(0));
}

#[test]
fn test_backoff_doubles_and_caps() {
    let policy: RetryPolicy = RetryPolicy::default();

    assert_eq!(policy.backoff(0), Duration::from_millis(1_000));
    assert_eq!(policy.backoff(1), Duration::from_millis(2_000));
    assert_eq!(policy.backoff(2), Duration::from_millis(4_000));
    assert_eq!(policy.backoff(4), Duration::from_millis(16_000));
    assert_eq!(policy.backoff(5), Duration::from_millis(30_000));
    assert_eq!(policy.backoff(64), Duration::from_millis(30_000));
}

#[test]
fn test_session_expired_classification() {
    let expired: RequestError = RequestError::new(401, "expired").with_code("TOKEN_EXPIRED");
    let unauthorized: RequestError = RequestError::new(401, "who are you");

    assert_eq!(expired.classify(), ErrorKind::SessionExpired);
    assert_eq!(unauthorized.classify(), ErrorKind::Client(401));
    assert_eq!(RequestError::network("offline").classify(), ErrorKind::Network);
    assert_eq!(RequestError::new(503, "down").classify(), ErrorKind::Server(503));
    assert_eq!(RequestError::new(302, "moved").classify(), ErrorKind::Client(302));
}

#[test]
fn test_mutations_retry_once() {
    let policy: RetryPolicy = RetryPolicy::default();
    let error: RequestError = RequestError::new(500, "boom");

    assert_eq!(
        policy.decide(RequestKind::Mutation, 0, &error),
        RetryDecision::Retry {
            delay: Duration::from_millis(1_000)
        }
    );
    assert_eq!(
        policy.decide(RequestKind::Mutation, 1, &error),
        RetryDecision::GiveUp
    );
    assert_eq!(
        policy.decide(RequestKind::Mutation, 0, &RequestError::new(429, "slow")),
        RetryDecision::Retry {
            delay: Duration::from_millis(1_000)
        }
    );
}

#[test]
fn test_session_expiry_is_never_retried() {
    let policy: RetryPolicy = RetryPolicy::default();
    let error: RequestError = RequestError::new(401, "expired").with_code("SESSION_EXPIRED");

    assert_eq!(policy.decide(RequestKind::Query, 0, &error), RetryDecision::GiveUp);
}

#[tokio::test(start_paused = true)]
async fn test_run_gives_up_after_query_budget() {
    let counter: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let policy: RetryPolicy = RetryPolicy::default();
    let fetch = failing(&counter, RequestError::new(503, "down"));

    let result: Result<Value, RequestError> = policy.run(RequestKind::Query, "test", &fetch).await;

    assert_eq!(result.unwrap_err().status, 503);
    assert_eq!(calls(&counter), 4);
}

#[tokio::test(start_paused = true)]
async fn test_run_does_not_retry_client_errors() {
    let counter: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let policy: RetryPolicy = RetryPolicy::default();
    let fetch = failing(&counter, RequestError::new(422, "bad input"));

    let result: Result<Value, RequestError> = policy.run(RequestKind::Query, "test", &fetch).await;

    assert_eq!(result.unwrap_err().message, "bad input");
    assert_eq!(calls(&counter), 1);
}

#[tokio::test(start_paused = true)]
async fn test_run_recovers_after_transient_failure() {
    let attempts: AtomicUsize = AtomicUsize::new(0);
    let policy: RetryPolicy = RetryPolicy::default();
    let started = tokio::time::Instant::now();

    let result: Result<Value, RequestError> = policy
        .run(RequestKind::Query, "test", || {
            let attempt: usize = attempts.fetch_add(1, Ordering::SeqCst);
            ready(if attempt < 2 {
                Err(RequestError::new(502, "bad gateway"))
            } else {
                Ok(json!({"ok": true}))
            })
        })
        .await;

    assert_eq!(result.unwrap(), json!({"ok": true}));
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
    assert_eq!(started.elapsed(), Duration::from_millis(3_000));
}

#[tokio::test(start_paused = true)]
async fn test_run_returns_first_success_without_delay() {
    let counter: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let policy: RetryPolicy = RetryPolicy::default();
    let fetch = counting(&counter, json!(1));

    let result: Result<Value, RequestError> =
        policy.run(RequestKind::Mutation, "test", &fetch).await;

    assert_eq!(result.unwrap(), json!(1));
    assert_eq!(calls(&counter), 1);
}
