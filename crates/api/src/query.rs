// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed read descriptors.

use bookit::{Observer, QueryKey};
use serde::Serialize;
use std::marker::PhantomData;

/// A cached read: the key it is stored under, the path it is fetched from
/// and the type it decodes to.
#[derive(Debug)]
pub struct Query<T> {
    key: QueryKey,
    path: String,
    empty_on_not_found: bool,
    marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Query<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            path: self.path.clone(),
            empty_on_not_found: self.empty_on_not_found,
            marker: PhantomData,
        }
    }
}

impl<T> PartialEq for Query<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.path == other.path
            && self.empty_on_not_found == other.empty_on_not_found
    }
}

impl<T> Query<T> {
    /// Creates a read of `path` cached under `key`.
    #[must_use]
    pub fn new(key: QueryKey, path: impl Into<String>) -> Self {
        Self {
            key,
            path: path.into(),
            empty_on_not_found: false,
            marker: PhantomData,
        }
    }

    /// Treats a 404 as an empty collection instead of an error.
    #[must_use]
    pub const fn empty_on_not_found(mut self) -> Self {
        self.empty_on_not_found = true;
        self
    }

    /// Returns the cache key.
    #[must_use]
    pub const fn key(&self) -> &QueryKey {
        &self.key
    }

    /// Returns the request path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns whether a 404 reads as an empty collection.
    #[must_use]
    pub const fn is_empty_on_not_found(&self) -> bool {
        self.empty_on_not_found
    }
}

/// A query with an attached observer. Dropping it detaches the observer.
#[derive(Debug)]
pub struct Subscription<T> {
    query: Query<T>,
    observer: Observer,
}

impl<T> Subscription<T> {
    pub(crate) const fn new(query: Query<T>, observer: Observer) -> Self {
        Self { query, observer }
    }

    /// Returns the observed query.
    #[must_use]
    pub const fn query(&self) -> &Query<T> {
        &self.query
    }

    /// Returns the attached observer.
    #[must_use]
    pub const fn observer(&self) -> &Observer {
        &self.observer
    }
}

/// Appends `params` to `path` as a query string. Absent parameters are
/// skipped.
pub(crate) fn with_query(
    path: &str,
    params: &[(&str, Option<&str>)],
) -> Result<String, crate::ApiError> {
    let present: Vec<(&str, &str)> = params
        .iter()
        .filter_map(|(name, value)| value.map(|v| (*name, v)))
        .collect();
    if present.is_empty() {
        return Ok(path.to_string());
    }
    let query: String =
        serde_urlencoded::to_string(&present).map_err(|e| crate::ApiError::Internal {
            message: format!("Could not encode query string: {e}"),
        })?;
    Ok(format!("{path}?{query}"))
}

/// Serializes a request body.
pub(crate) fn to_body<P: Serialize>(payload: &P) -> Result<serde_json::Value, crate::ApiError> {
    serde_json::to_value(payload).map_err(|e| crate::ApiError::Internal {
        message: format!("Could not encode request body: {e}"),
    })
}
