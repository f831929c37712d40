// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Process-wide cache of server results.
//!
//! The cache is one map from [`QueryKey`] to entry, guarded by a single
//! lock that is never held across an await. Entries are only changed by a
//! completed fetch, an invalidation, or an explicit write.
//!
//! ## Invariants
//!
//! - A fresh entry (fetched within its staleness window and not
//!   invalidated) is served without touching the network
//! - Concurrent fetches of one key share a single in-flight request
//! - Every invalidation or write bumps the entry generation; a fetch that
//!   started under an older generation never marks the entry fresh, so a
//!   read can never look newer than a completed write
//! - A response is committed only while the observer that issued it is
//!   still attached; late responses are dropped
//! - Refetching is observer driven: an entry nobody observes is never
//!   refetched, however stale

use crate::config::ClientConfig;
use crate::error::{CoreError, RequestError};
use crate::keys::QueryKey;
use futures::future::{BoxFuture, FutureExt, Shared};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::time::Instant;
use tracing::debug;

/// Result of one network fetch.
pub type FetchResult = Result<Value, RequestError>;

/// Produces a fresh request for a key each time it is called.
pub type Fetcher = Arc<dyn Fn() -> BoxFuture<'static, FetchResult> + Send + Sync>;

type SharedFetch = Shared<BoxFuture<'static, FetchResult>>;

/// Identifies one attached observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

struct InFlight {
    future: SharedFetch,
    generation: u64,
    originator: ObserverId,
}

#[derive(Default)]
struct CacheEntry {
    data: Option<Value>,
    fetched_at: Option<Instant>,
    stale_at: Option<Instant>,
    error: Option<RequestError>,
    invalidated: bool,
    generation: u64,
    observers: HashSet<ObserverId>,
    fetcher: Option<Fetcher>,
    in_flight: Option<InFlight>,
}

impl CacheEntry {
    fn is_stale(&self, now: Instant) -> bool {
        self.invalidated || self.data.is_none() || self.stale_at.is_none_or(|at| now >= at)
    }

    fn fresh_data(&self, now: Instant) -> Option<Value> {
        if self.is_stale(now) {
            None
        } else {
            self.data.clone()
        }
    }

    /// Returns the in-flight request if it started under the current
    /// generation.
    fn current_flight(&self) -> Option<&InFlight> {
        self.in_flight
            .as_ref()
            .filter(|in_flight| in_flight.generation == self.generation)
    }

    fn write(&mut self, value: Value, now: Instant, stale_time: std::time::Duration) {
        self.data = Some(value);
        self.fetched_at = Some(now);
        self.stale_at = Some(now + stale_time);
        self.error = None;
        self.invalidated = false;
    }

    fn reset(&mut self) {
        self.data = None;
        self.fetched_at = None;
        self.stale_at = None;
        self.error = None;
        self.in_flight = None;
        self.invalidated = true;
        self.generation += 1;
    }
}

#[derive(Default)]
struct CacheState {
    entries: HashMap<QueryKey, CacheEntry>,
    next_observer: u64,
}

fn lock(state: &Mutex<CacheState>) -> MutexGuard<'_, CacheState> {
    // Entries stay consistent between statements, so a poisoned lock is safe to reuse.
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Read-only view of one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheSnapshot {
    /// Last committed data.
    pub data: Option<Value>,
    /// When `data` was committed.
    pub fetched_at: Option<Instant>,
    /// When `data` stops being fresh.
    pub stale_at: Option<Instant>,
    /// Last error, cleared by the next successful fetch.
    pub error: Option<RequestError>,
    /// Whether the next observation will hit the network.
    pub is_stale: bool,
    /// Attached observers.
    pub observers: usize,
    /// Whether a request is in flight.
    pub is_fetching: bool,
}

/// An attached consumer of one key.
///
/// Dropping the observer detaches it; responses it requested that arrive
/// afterwards are not committed.
pub struct Observer {
    id: ObserverId,
    key: QueryKey,
    state: Arc<Mutex<CacheState>>,
}

impl Observer {
    /// Returns this observer's id.
    #[must_use]
    pub const fn id(&self) -> ObserverId {
        self.id
    }

    /// Returns the observed key.
    #[must_use]
    pub const fn key(&self) -> &QueryKey {
        &self.key
    }
}

impl std::fmt::Debug for Observer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observer")
            .field("id", &self.id)
            .field("key", &self.key.to_string())
            .finish()
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        let mut state = lock(&self.state);
        if let Some(entry) = state.entries.get_mut(&self.key) {
            entry.observers.remove(&self.id);
        }
    }
}

/// Shared cache handle. Clones refer to the same map.
#[derive(Clone)]
pub struct QueryCache {
    state: Arc<Mutex<CacheState>>,
    config: Arc<ClientConfig>,
}

impl std::fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryCache")
            .field("entries", &self.len())
            .finish_non_exhaustive()
    }
}

impl QueryCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new(config: Arc<ClientConfig>) -> Self {
        Self {
            state: Arc::new(Mutex::new(CacheState::default())),
            config,
        }
    }

    /// Attaches a new observer to `key`.
    #[must_use]
    pub fn observe(&self, key: QueryKey) -> Observer {
        let mut state = lock(&self.state);
        state.next_observer += 1;
        let id: ObserverId = ObserverId(state.next_observer);
        state
            .entries
            .entry(key.clone())
            .or_default()
            .observers
            .insert(id);
        debug!(%key, observer = id.0, "Observer attached");
        Observer {
            id,
            key,
            state: Arc::clone(&self.state),
        }
    }

    /// Returns the data for `key`, fetching it if the entry is not fresh.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Request` if the fetch fails, or
    /// `CoreError::Discarded` if `observer` detached before the response
    /// arrived.
    pub async fn fetch(
        &self,
        key: &QueryKey,
        observer: ObserverId,
        fetcher: Fetcher,
    ) -> Result<Value, CoreError> {
        let future: SharedFetch = {
            let mut state = lock(&self.state);
            let entry: &mut CacheEntry = state.entries.entry(key.clone()).or_default();
            entry.fetcher = Some(Arc::clone(&fetcher));

            if let Some(data) = entry.fresh_data(Instant::now()) {
                debug!(%key, "Cache hit");
                return Ok(data);
            }

            if let Some(in_flight) = entry.current_flight() {
                debug!(%key, "Joining in-flight request");
                in_flight.future.clone()
            } else {
                // A flight from before the last write is replaced, not joined.
                debug!(%key, generation = entry.generation, "Cache miss, fetching");
                let future: SharedFetch = fetcher().shared();
                entry.in_flight = Some(InFlight {
                    future: future.clone(),
                    generation: entry.generation,
                    originator: observer,
                });
                future
            }
        };

        let result: FetchResult = future.clone().await;

        let observer_active: bool = {
            let mut state = lock(&self.state);
            let stale_time = self.config.stale_time_for(key.entity());
            match state.entries.get_mut(key) {
                Some(entry) => {
                    let owns: bool = entry
                        .in_flight
                        .as_ref()
                        .is_some_and(|f| f.future.ptr_eq(&future));
                    if owns {
                        if let Some(in_flight) = entry.in_flight.take() {
                            commit(key, entry, &in_flight, &result, stale_time);
                        }
                    }
                    entry.observers.contains(&observer)
                }
                None => false,
            }
        };

        match result {
            Ok(value) if observer_active => Ok(value),
            Ok(_) => Err(CoreError::Discarded {
                key: key.to_string(),
            }),
            Err(error) => Err(CoreError::Request(error)),
        }
    }

    /// Marks every key under `prefix` stale. Returns how many entries matched.
    pub fn invalidate(&self, prefix: &QueryKey) -> usize {
        self.settle(std::slice::from_ref(prefix), &[])
    }

    /// Applies the outcome of a successful write in one step.
    ///
    /// Every key under each `affected` prefix is marked stale, then each
    /// `replaced` key is overwritten with fresh data. Returns how many
    /// entries were invalidated.
    pub fn settle(&self, affected: &[QueryKey], replaced: &[(QueryKey, Value)]) -> usize {
        let now: Instant = Instant::now();
        let mut state = lock(&self.state);
        let mut count: usize = 0;
        for (key, entry) in &mut state.entries {
            if affected.iter().any(|prefix| key.starts_with(prefix)) {
                entry.invalidated = true;
                entry.generation += 1;
                count += 1;
            }
        }
        for (key, value) in replaced {
            let stale_time = self.config.stale_time_for(key.entity());
            let entry: &mut CacheEntry = state.entries.entry(key.clone()).or_default();
            entry.write(value.clone(), now, stale_time);
            entry.generation += 1;
        }
        debug!(
            invalidated = count,
            replaced = replaced.len(),
            "Settled cache after write"
        );
        count
    }

    /// Writes `value` as fresh data for `key`.
    pub fn set_data(&self, key: &QueryKey, value: Value) {
        self.settle(&[], &[(key.clone(), value)]);
    }

    /// Returns the committed data for `key`, fresh or not.
    #[must_use]
    pub fn get_data(&self, key: &QueryKey) -> Option<Value> {
        lock(&self.state)
            .entries
            .get(key)
            .and_then(|entry| entry.data.clone())
    }

    /// Returns a view of the entry for `key`.
    #[must_use]
    pub fn snapshot(&self, key: &QueryKey) -> Option<CacheSnapshot> {
        let now: Instant = Instant::now();
        lock(&self.state).entries.get(key).map(|entry| CacheSnapshot {
            data: entry.data.clone(),
            fetched_at: entry.fetched_at,
            stale_at: entry.stale_at,
            error: entry.error.clone(),
            is_stale: entry.is_stale(now),
            observers: entry.observers.len(),
            is_fetching: entry.current_flight().is_some(),
        })
    }

    /// Returns whether the next observation of `key` will hit the network.
    #[must_use]
    pub fn is_stale(&self, key: &QueryKey) -> bool {
        let now: Instant = Instant::now();
        lock(&self.state)
            .entries
            .get(key)
            .is_none_or(|entry| entry.is_stale(now))
    }

    /// Drops every key under `prefix`.
    ///
    /// Entries that still have observers are kept but emptied, so their
    /// observers refetch. Returns how many entries matched.
    pub fn remove(&self, prefix: &QueryKey) -> usize {
        self.remove_where(|key| key.starts_with(prefix))
    }

    /// Drops every entry. Observed entries are emptied instead.
    pub fn clear(&self) -> usize {
        self.remove_where(|_| true)
    }

    fn remove_where(&self, matches: impl Fn(&QueryKey) -> bool) -> usize {
        let mut state = lock(&self.state);
        let mut count: usize = 0;
        state.entries.retain(|key, entry| {
            if !matches(key) {
                return true;
            }
            count += 1;
            if entry.observers.is_empty() {
                false
            } else {
                entry.reset();
                true
            }
        });
        debug!(removed = count, "Removed cache entries");
        count
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.state).entries.len()
    }

    /// Returns whether the cache has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        lock(&self.state).entries.is_empty()
    }

    /// Returns observed, stale, idle entries with a known fetcher.
    pub(crate) fn refetch_candidates(&self) -> Vec<(QueryKey, ObserverId, Fetcher)> {
        let now: Instant = Instant::now();
        lock(&self.state)
            .entries
            .iter()
            .filter(|(_, entry)| entry.current_flight().is_none() && entry.is_stale(now))
            .filter_map(|(key, entry)| {
                let observer: ObserverId = entry.observers.iter().min().copied()?;
                let fetcher: Fetcher = entry.fetcher.clone()?;
                Some((key.clone(), observer, fetcher))
            })
            .collect()
    }
}

fn commit(
    key: &QueryKey,
    entry: &mut CacheEntry,
    in_flight: &InFlight,
    result: &FetchResult,
    stale_time: std::time::Duration,
) {
    if !entry.observers.contains(&in_flight.originator) {
        debug!(%key, "Discarding response for detached observer");
        return;
    }
    match result {
        Ok(value) => {
            if entry.generation == in_flight.generation {
                entry.write(value.clone(), Instant::now(), stale_time);
            } else {
                debug!(%key, "Discarding response superseded by a newer write");
            }
        }
        Err(error) => {
            entry.error = Some(error.clone());
        }
    }
}
