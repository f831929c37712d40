// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The application-facing client.
//!
//! `BookitClient` ties the HTTP collaborator to the query cache and the
//! persisted stores. Per-entity operations are added in `contracts/`.

use crate::agent::{Agent, FileUpload, Method};
use crate::error::ApiError;
use crate::notifications::{ErrorHandler, Notification};
use crate::query::{Query, Subscription};
use bookit::{
    AppState, ClientConfig, Connectivity, MutationRequest, QueryClient, RequestKind,
    ResyncMonitor, ResyncReport,
};
use bookit_domain::UploadedFile;
use bookit_persistence::ClientStores;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Reads and writes server data for one signed-in (or guest) user.
pub struct BookitClient<A: Agent> {
    agent: Arc<A>,
    queries: QueryClient,
    stores: ClientStores,
    resync: Arc<Mutex<ResyncMonitor>>,
}

impl<A: Agent> Clone for BookitClient<A> {
    fn clone(&self) -> Self {
        Self {
            agent: Arc::clone(&self.agent),
            queries: self.queries.clone(),
            stores: self.stores.clone(),
            resync: Arc::clone(&self.resync),
        }
    }
}

impl<A: Agent> std::fmt::Debug for BookitClient<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookitClient")
            .field("queries", &self.queries)
            .field("stores", &self.stores)
            .finish_non_exhaustive()
    }
}

impl<A: Agent> BookitClient<A> {
    /// Creates a client over hydrated stores. A persisted token is handed
    /// to the agent immediately.
    #[must_use]
    pub fn new(agent: A, config: ClientConfig, stores: ClientStores) -> Self {
        let agent: Arc<A> = Arc::new(agent);
        let token: Option<String> = stores.session.token();
        agent.authorize(token.as_deref());
        info!(authenticated = token.is_some(), "Bookit client ready");
        Self {
            agent,
            queries: QueryClient::new(config),
            stores,
            resync: Arc::new(Mutex::new(ResyncMonitor::new())),
        }
    }

    /// Returns the HTTP collaborator.
    #[must_use]
    pub fn agent(&self) -> &A {
        &self.agent
    }

    /// Returns the query client.
    #[must_use]
    pub const fn queries(&self) -> &QueryClient {
        &self.queries
    }

    /// Returns the persisted stores.
    #[must_use]
    pub const fn stores(&self) -> &ClientStores {
        &self.stores
    }

    /// Attaches an observer to `query`.
    #[must_use]
    pub fn subscribe<T>(&self, query: Query<T>) -> Subscription<T> {
        let observer = self.queries.observe(query.key().clone());
        Subscription::new(query, observer)
    }

    /// Reads the subscribed query, from cache when fresh.
    ///
    /// # Errors
    ///
    /// Returns the classified request error, a decode error, or
    /// `ApiError::Discarded` if the subscription was dropped mid-flight.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        subscription: &Subscription<T>,
    ) -> Result<T, ApiError> {
        let query: &Query<T> = subscription.query();
        let agent: Arc<A> = Arc::clone(&self.agent);
        let path: String = query.path().to_string();
        let empty_on_not_found: bool = query.is_empty_on_not_found();

        let value: T = self
            .queries
            .query(subscription.observer(), move || {
                let agent: Arc<A> = Arc::clone(&agent);
                let path: String = path.clone();
                async move {
                    match agent.get(&path).await {
                        Err(err) if empty_on_not_found && err.is_not_found() => {
                            debug!(path = %path, "Missing collection read as empty");
                            Ok(Value::Array(Vec::new()))
                        }
                        other => other,
                    }
                }
            })
            .await?;
        Ok(value)
    }

    /// Reads `query` once, attaching an observer only for the duration of
    /// the call.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch`].
    pub async fn load<T: DeserializeOwned>(&self, query: Query<T>) -> Result<T, ApiError> {
        let subscription: Subscription<T> = self.subscribe(query);
        self.fetch(&subscription).await
    }

    /// Sends a write and settles the cache.
    pub(crate) async fn write<T: DeserializeOwned>(
        &self,
        request: MutationRequest<Value>,
        method: Method,
        path: &str,
    ) -> Result<T, ApiError> {
        let agent: &A = &self.agent;
        let body: &Value = request.payload();
        debug!(%method, path, mutation = %request.label(), "Sending write");
        let value: T = self
            .queries
            .mutate(&request, || agent.send(method, path, body.clone()))
            .await?;
        Ok(value)
    }

    /// Uploads a file under the mutation retry budget.
    pub(crate) async fn upload(&self, file: FileUpload) -> Result<UploadedFile, ApiError> {
        let agent: &A = &self.agent;
        let uploaded: UploadedFile = self
            .queries
            .config()
            .retry
            .run(RequestKind::Mutation, "files.upload", || agent.upload(file.clone()))
            .await?;
        debug!(file_id = %uploaded.id, "File uploaded");
        Ok(uploaded)
    }

    /// Persists a new session and hands its token to the agent.
    pub(crate) fn start_session(
        &self,
        token: &str,
        role: bookit_domain::RoleState,
    ) -> Result<(), ApiError> {
        self.stores.session.sign_in(token, role)?;
        self.agent.authorize(Some(token));
        Ok(())
    }

    /// Forgets the session, form drafts and every cached server result.
    ///
    /// Local state is cleared even if storage fails; the storage error is
    /// logged.
    pub fn teardown_session(&self) {
        self.agent.authorize(None);
        if let Err(err) = self.stores.session.teardown() {
            warn!(%err, "Failed to clear persisted session");
        }
        if let Err(err) = self.stores.drafts.discard_all() {
            warn!(%err, "Failed to discard form drafts");
        }
        let removed: usize = self.queries.clear();
        info!(removed, "Session torn down");
    }

    /// Returns the global error handler.
    #[must_use]
    pub fn error_handler(&self) -> ErrorHandler {
        let client: Self = self.clone();
        ErrorHandler::new(
            Arc::clone(&self.stores.preferences),
            Arc::new(move || client.teardown_session()),
        )
    }

    /// Maps a surfaced error to a notification, tearing the session down
    /// first if it expired. Returns `None` for errors nobody should see.
    #[must_use]
    pub fn handle_error(&self, error: &ApiError) -> Option<Notification> {
        self.error_handler().handle(error)
    }

    /// Reports a lifecycle change; refetches stale observed data when the
    /// app returns to the foreground.
    pub async fn app_state_changed(&self, next: AppState) -> Option<ResyncReport> {
        self.resync.lock().await.on_app_state(&self.queries, next).await
    }

    /// Reports a connectivity change; refetches stale observed data when
    /// the connection returns.
    pub async fn connectivity_changed(&self, next: Connectivity) -> Option<ResyncReport> {
        self.resync
            .lock()
            .await
            .on_connectivity(&self.queries, next)
            .await
    }
}
