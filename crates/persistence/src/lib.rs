// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persisted client state for Bookit.
//!
//! This crate provides the key-value storage collaborator and the stores
//! built on it: session and role, display preferences, onboarding flags
//! and form drafts.
//!
//! ## Backends
//!
//! - [`MemoryStorage`] keeps items in process memory, for tests and
//!   ephemeral sessions
//! - [`SqliteStorage`] keeps items in a `SQLite` database through Diesel,
//!   with embedded migrations applied on open
//!
//! ## Hydration
//!
//! Stores are hydrated once at startup with [`ClientStores::hydrate`].
//! Absent keys fall back to defaults; unreadable values are logged and
//! replaced by defaults rather than failing startup.

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
#![allow(clippy::multiple_crate_versions)]

mod backend;
mod diesel_schema;
mod error;
mod memory;
mod sqlite;
mod storage;
mod stores;

#[cfg(test)]
mod tests;

use std::sync::Arc;
use tracing::info;

pub use error::PersistenceError;
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;
pub use storage::{KeyValueStorage, read_json, write_json};
pub use stores::{
    DraftStore, Onboarding, OnboardingStore, Preferences, PreferencesStore, Session, SessionStore,
};

/// Every persisted store, hydrated from one storage backend.
#[derive(Debug, Clone)]
pub struct ClientStores {
    /// Session token and role state.
    pub session: Arc<SessionStore>,
    /// Language and theme.
    pub preferences: Arc<PreferencesStore>,
    /// Onboarding flags.
    pub onboarding: Arc<OnboardingStore>,
    /// Form drafts.
    pub drafts: DraftStore,
}

impl ClientStores {
    /// Hydrates every store from `storage`.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read.
    pub fn hydrate(storage: Arc<dyn KeyValueStorage>) -> Result<Self, PersistenceError> {
        let stores: Self = Self {
            session: Arc::new(SessionStore::hydrate(Arc::clone(&storage))?),
            preferences: Arc::new(PreferencesStore::hydrate(Arc::clone(&storage))?),
            onboarding: Arc::new(OnboardingStore::hydrate(Arc::clone(&storage))?),
            drafts: DraftStore::new(storage),
        };
        info!("Client stores hydrated");
        Ok(stores)
    }

    /// Hydrates every store from fresh in-memory storage.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature matches [`Self::hydrate`].
    pub fn in_memory() -> Result<Self, PersistenceError> {
        Self::hydrate(Arc::new(MemoryStorage::new()))
    }
}
