// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Process-wide client state backed by persisted storage.
//!
//! Each store is hydrated once at startup and changed only through its
//! setters. Setters write storage first and update memory only once the
//! write succeeded. Absent or unreadable keys hydrate to defaults.

mod drafts;
mod onboarding;
mod preferences;
mod session;

pub use drafts::DraftStore;
pub use onboarding::{Onboarding, OnboardingStore};
pub use preferences::{Preferences, PreferencesStore};
pub use session::{Session, SessionStore};

use crate::error::PersistenceError;
use crate::storage::{KeyValueStorage, read_json};
use serde::de::DeserializeOwned;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::warn;

/// Reads a JSON value, falling back to `T::default()` when it is absent or
/// does not decode. Backend failures still propagate.
fn hydrate_json<T: DeserializeOwned + Default>(
    storage: &dyn KeyValueStorage,
    key: &str,
) -> Result<T, PersistenceError> {
    match read_json::<T>(storage, key) {
        Ok(value) => Ok(value.unwrap_or_default()),
        Err(PersistenceError::SerializationError { key, message }) => {
            warn!(key, message, "Discarding unreadable stored value");
            Ok(T::default())
        }
        Err(err) => Err(err),
    }
}

fn lock<T>(state: &Mutex<T>) -> MutexGuard<'_, T> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
