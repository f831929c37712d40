// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use crate::storage::{KeyValueStorage, read_json, write_json};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// Prefix of draft storage keys; the form id follows it.
pub const DRAFT_KEY_PREFIX: &str = "bookit.draft.";

/// Unsubmitted form state, one JSON document per form id.
///
/// Drafts are read on demand rather than hydrated, since a form restores
/// its own draft when it opens.
#[derive(Debug, Clone)]
pub struct DraftStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl DraftStore {
    /// Creates a store over `storage`.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    fn key(form_id: &str) -> String {
        format!("{DRAFT_KEY_PREFIX}{form_id}")
    }

    /// Loads the draft for `form_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or the draft no longer matches `T`.
    pub fn load<T: DeserializeOwned>(&self, form_id: &str) -> Result<Option<T>, PersistenceError> {
        read_json(self.storage.as_ref(), &Self::key(form_id))
    }

    /// Saves the draft for `form_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft cannot be encoded or stored.
    pub fn save<T: Serialize>(&self, form_id: &str, draft: &T) -> Result<(), PersistenceError> {
        write_json(self.storage.as_ref(), &Self::key(form_id), draft)?;
        debug!(form_id, "Draft saved");
        Ok(())
    }

    /// Drops the draft for `form_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be written.
    pub fn discard(&self, form_id: &str) -> Result<(), PersistenceError> {
        self.storage.remove_item(&Self::key(form_id))?;
        debug!(form_id, "Draft discarded");
        Ok(())
    }

    /// Drops every stored draft. Returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns the first storage error.
    pub fn discard_all(&self) -> Result<usize, PersistenceError> {
        let keys: Vec<String> = self.storage.keys_with_prefix(DRAFT_KEY_PREFIX)?;
        for key in &keys {
            self.storage.remove_item(key)?;
        }
        debug!(count = keys.len(), "All drafts discarded");
        Ok(keys.len())
    }
}
