// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reads and writes against the shared cache.
//!
//! Reads go through the cache and the query retry budget. Writes go
//! through the mutation retry budget and, once the server accepts them,
//! invalidate the affected keys before returning.

use crate::cache::{FetchResult, Fetcher, Observer, QueryCache};
use crate::config::ClientConfig;
use crate::error::CoreError;
use crate::keys::QueryKey;
use crate::mutation::MutationRequest;
use crate::resync::{ResyncReport, ResyncTrigger};
use crate::retry::RequestKind;
use futures::FutureExt;
use futures::future::join_all;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use tracing::{info, warn};

/// Decodes a cached or returned value.
///
/// # Errors
///
/// Returns `CoreError::Decode` if `value` does not match `T`.
pub fn decode<T: DeserializeOwned>(label: &str, value: Value) -> Result<T, CoreError> {
    serde_json::from_value(value).map_err(|e| CoreError::Decode {
        key: label.to_string(),
        message: e.to_string(),
    })
}

/// Entry point for all server reads and writes.
#[derive(Debug, Clone)]
pub struct QueryClient {
    cache: QueryCache,
    config: Arc<ClientConfig>,
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl QueryClient {
    /// Creates a client with an empty cache.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        let config: Arc<ClientConfig> = Arc::new(config);
        Self {
            cache: QueryCache::new(Arc::clone(&config)),
            config,
        }
    }

    /// Returns the shared cache.
    #[must_use]
    pub const fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Attaches an observer to `key`.
    #[must_use]
    pub fn observe(&self, key: QueryKey) -> Observer {
        self.cache.observe(key)
    }

    /// Reads the observed key, from cache when fresh.
    ///
    /// `fetch` is remembered so lifecycle resyncs can refetch the key
    /// while it stays observed.
    ///
    /// # Errors
    ///
    /// Returns the request error once retries are exhausted, a decode
    /// error if the data does not match `T`, or `CoreError::Discarded` if
    /// the observer detached mid-flight.
    pub async fn query<T, F, Fut>(&self, observer: &Observer, fetch: F) -> Result<T, CoreError>
    where
        T: DeserializeOwned,
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = FetchResult> + Send + 'static,
    {
        let label: String = observer.key().to_string();
        let fetcher: Fetcher = self.retrying_fetcher(label.clone(), fetch);
        let value: Value = self
            .cache
            .fetch(observer.key(), observer.id(), fetcher)
            .await?;
        decode(&label, value)
    }

    fn retrying_fetcher<F, Fut>(&self, label: String, fetch: F) -> Fetcher
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = FetchResult> + Send + 'static,
    {
        let fetch: Arc<F> = Arc::new(fetch);
        let config: Arc<ClientConfig> = Arc::clone(&self.config);
        Arc::new(move || {
            let fetch: Arc<F> = Arc::clone(&fetch);
            let config: Arc<ClientConfig> = Arc::clone(&config);
            let label: String = label.clone();
            async move {
                config
                    .retry
                    .run(RequestKind::Query, &label, || (*fetch)())
                    .await
            }
            .boxed()
        })
    }

    /// Performs a write and settles the cache.
    ///
    /// The affected keys are invalidated, and replaced keys written, before
    /// this returns, so a read issued after it never sees pre-write data.
    ///
    /// # Errors
    ///
    /// Returns the request error once the mutation retry budget is spent,
    /// or a decode error if the response does not match `T`. The cache is
    /// untouched when the request fails.
    pub async fn mutate<P, T, F, Fut>(
        &self,
        request: &MutationRequest<P>,
        op: F,
    ) -> Result<T, CoreError>
    where
        P: Sync,
        T: DeserializeOwned,
        F: FnMut() -> Fut + Send,
        Fut: Future<Output = FetchResult> + Send,
    {
        let label: String = request.label();
        let value: Value = self
            .config
            .retry
            .run(RequestKind::Mutation, &label, op)
            .await?;
        let replaced: Vec<(QueryKey, Value)> = request
            .replaced_keys()
            .iter()
            .map(|key| (key.clone(), value.clone()))
            .collect();
        let invalidated: usize = self.cache.settle(request.affected_keys(), &replaced);
        info!(
            mutation = %label,
            invalidated,
            replaced = replaced.len(),
            "Mutation settled"
        );
        decode(&label, value)
    }

    /// Marks every key under `prefix` stale.
    pub fn invalidate(&self, prefix: &QueryKey) -> usize {
        self.cache.invalidate(prefix)
    }

    /// Drops every cached entry.
    pub fn clear(&self) -> usize {
        let removed: usize = self.cache.clear();
        info!(removed, "Query cache cleared");
        removed
    }

    /// Refetches every observed key that is stale. Fresh and unobserved
    /// keys are left alone.
    pub async fn resync(&self, trigger: ResyncTrigger) -> ResyncReport {
        let candidates = self.cache.refetch_candidates();
        info!(?trigger, candidates = candidates.len(), "Resyncing observed queries");

        let results: Vec<Result<Value, CoreError>> =
            join_all(candidates.into_iter().map(|(key, observer, fetcher)| {
                let cache: QueryCache = self.cache.clone();
                async move { cache.fetch(&key, observer, fetcher).await }
            }))
            .await;

        let mut report: ResyncReport = ResyncReport::default();
        for result in results {
            match result {
                Ok(_) => report.refetched += 1,
                Err(error) => {
                    warn!(%error, "Resync refetch failed");
                    report.failed += 1;
                }
            }
        }
        report
    }
}
