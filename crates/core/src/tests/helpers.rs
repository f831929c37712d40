// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{FetchResult, Fetcher, RequestError};
use futures::FutureExt;
use futures::future::{BoxFuture, Ready, ready};
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Returns a fetch function that counts its calls and answers `value`.
pub fn counting(
    calls: &Arc<AtomicUsize>,
    value: Value,
) -> impl Fn() -> Ready<FetchResult> + Send + Sync + 'static {
    let calls: Arc<AtomicUsize> = Arc::clone(calls);
    move || {
        calls.fetch_add(1, Ordering::SeqCst);
        ready(Ok(value.clone()))
    }
}

/// Returns a fetch function that counts its calls and always fails.
pub fn failing(
    calls: &Arc<AtomicUsize>,
    error: RequestError,
) -> impl Fn() -> Ready<FetchResult> + Send + Sync + 'static {
    let calls: Arc<AtomicUsize> = Arc::clone(calls);
    move || {
        calls.fetch_add(1, Ordering::SeqCst);
        ready(Err(error.clone()))
    }
}

/// Returns a fetcher that answers `value` after `delay`.
pub fn delayed(calls: &Arc<AtomicUsize>, value: Value, delay: Duration) -> Fetcher {
    let calls: Arc<AtomicUsize> = Arc::clone(calls);
    Arc::new(move || -> BoxFuture<'static, FetchResult> {
        calls.fetch_add(1, Ordering::SeqCst);
        let value: Value = value.clone();
        async move {
            tokio::time::sleep(delay).await;
            Ok(value)
        }
        .boxed()
    })
}

pub fn calls(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}
