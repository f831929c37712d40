// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cursor-paged search.
//!
//! Each page is cached under its own `(q, cursor)` key. [`SearchPager`]
//! walks pages in order and stops once the server omits `nextCursor`.

use crate::agent::Agent;
use crate::client::BookitClient;
use crate::error::ApiError;
use crate::query::{Query, with_query};
use bookit::{Entity, QueryKey};
use bookit_domain::{Brand, Page, Service};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

fn search_query<T>(scope: &str, text: &str, cursor: Option<&str>) -> Result<Query<Page<T>>, ApiError> {
    Ok(Query::new(
        QueryKey::scoped(Entity::Search, scope, json!({ "q": text, "cursor": cursor })),
        with_query(&format!("/search/{scope}"), &[("q", Some(text)), ("cursor", cursor)])?,
    ))
}

/// `GET /search/brands?q=&cursor=`
///
/// # Errors
///
/// Returns an error if the query string cannot be encoded.
pub fn search_brands(text: &str, cursor: Option<&str>) -> Result<Query<Page<Brand>>, ApiError> {
    search_query("brands", text, cursor)
}

/// `GET /search/services?q=&cursor=`
///
/// # Errors
///
/// Returns an error if the query string cannot be encoded.
pub fn search_services(
    text: &str,
    cursor: Option<&str>,
) -> Result<Query<Page<Service>>, ApiError> {
    search_query("services", text, cursor)
}

type PageQuery<T> = fn(&str, Option<&str>) -> Result<Query<Page<T>>, ApiError>;

/// Walks the pages of one search.
#[derive(Debug, Clone)]
pub struct SearchPager<T> {
    text: String,
    build: PageQuery<T>,
    cursor: Option<String>,
    exhausted: bool,
}

impl SearchPager<Brand> {
    /// Pages through brands matching `text`.
    #[must_use]
    pub fn brands(text: impl Into<String>) -> Self {
        Self::new(text.into(), search_brands)
    }
}

impl SearchPager<Service> {
    /// Pages through services matching `text`.
    #[must_use]
    pub fn services(text: impl Into<String>) -> Self {
        Self::new(text.into(), search_services)
    }
}

impl<T: DeserializeOwned + Send> SearchPager<T> {
    const fn new(text: String, build: PageQuery<T>) -> Self {
        Self {
            text,
            build,
            cursor: None,
            exhausted: false,
        }
    }

    /// Returns whether the last page has been read.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Loads the next page, or `None` once the last one has been read.
    ///
    /// A failed page leaves the pager where it was, so it can be retried.
    ///
    /// # Errors
    ///
    /// Returns the request or decode error.
    pub async fn next_page<A: Agent>(
        &mut self,
        client: &BookitClient<A>,
    ) -> Result<Option<Page<T>>, ApiError> {
        if self.exhausted {
            return Ok(None);
        }
        let query: Query<Page<T>> = (self.build)(&self.text, self.cursor.as_deref())?;
        let page: Page<T> = client.load(query).await?;
        debug!(
            q = %self.text,
            items = page.items.len(),
            has_more = page.has_more(),
            "Search page loaded"
        );
        self.exhausted = !page.has_more();
        self.cursor.clone_from(&page.next_cursor);
        Ok(Some(page))
    }

    /// Loads up to `max_pages` pages and concatenates their items.
    ///
    /// # Errors
    ///
    /// Returns the first request or decode error.
    pub async fn collect_all<A: Agent>(
        &mut self,
        client: &BookitClient<A>,
        max_pages: usize,
    ) -> Result<Vec<T>, ApiError> {
        let mut items: Vec<T> = Vec::new();
        for _ in 0..max_pages {
            match self.next_page(client).await? {
                Some(page) => items.extend(page.items),
                None => break,
            }
        }
        Ok(items)
    }
}
