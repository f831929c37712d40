// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{hydrate_json, lock};
use crate::error::PersistenceError;
use crate::storage::{KeyValueStorage, write_json};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// Storage key of the onboarding state.
pub const ONBOARDING_KEY: &str = "bookit.onboarding";

/// First-run state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Onboarding {
    /// Whether the intro screens were completed.
    pub seen: bool,
    /// Business category picked during onboarding.
    pub selected_category: Option<String>,
}

/// Onboarding flags.
#[derive(Debug)]
pub struct OnboardingStore {
    storage: Arc<dyn KeyValueStorage>,
    state: Mutex<Onboarding>,
}

impl OnboardingStore {
    /// Loads persisted onboarding state.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read.
    pub fn hydrate(storage: Arc<dyn KeyValueStorage>) -> Result<Self, PersistenceError> {
        let onboarding: Onboarding = hydrate_json(storage.as_ref(), ONBOARDING_KEY)?;
        Ok(Self {
            storage,
            state: Mutex::new(onboarding),
        })
    }

    /// Returns the current state.
    #[must_use]
    pub fn snapshot(&self) -> Onboarding {
        lock(&self.state).clone()
    }

    /// Returns whether onboarding was completed.
    #[must_use]
    pub fn has_seen(&self) -> bool {
        lock(&self.state).seen
    }

    /// Returns the picked category.
    #[must_use]
    pub fn selected_category(&self) -> Option<String> {
        lock(&self.state).selected_category.clone()
    }

    /// Marks onboarding as completed.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be written.
    pub fn mark_seen(&self) -> Result<(), PersistenceError> {
        self.update(|state| state.seen = true)
    }

    /// Records the picked category.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be written.
    pub fn select_category(&self, category: Option<String>) -> Result<(), PersistenceError> {
        self.update(|state| state.selected_category = category)
    }

    /// Restores first-run state.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be written.
    pub fn reset(&self) -> Result<(), PersistenceError> {
        self.storage.remove_item(ONBOARDING_KEY)?;
        *lock(&self.state) = Onboarding::default();
        Ok(())
    }

    fn update(&self, change: impl FnOnce(&mut Onboarding)) -> Result<(), PersistenceError> {
        let mut state = lock(&self.state);
        let mut next: Onboarding = state.clone();
        change(&mut next);
        write_json(self.storage.as_ref(), ONBOARDING_KEY, &next)?;
        *state = next;
        Ok(())
    }
}
