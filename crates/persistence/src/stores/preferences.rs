// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::lock;
use crate::error::PersistenceError;
use crate::storage::KeyValueStorage;
use bookit_domain::{Locale, Theme};
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

/// Storage key of the UI language.
pub const LANGUAGE_KEY: &str = "bookit.preferences.language";
/// Storage key of the colour theme.
pub const THEME_KEY: &str = "bookit.preferences.theme";

/// Display preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    /// UI language.
    pub language: Locale,
    /// Colour theme.
    pub theme: Theme,
}

/// Language and theme.
#[derive(Debug)]
pub struct PreferencesStore {
    storage: Arc<dyn KeyValueStorage>,
    state: Mutex<Preferences>,
}

fn parse_or_default<T: FromStr + Default>(
    storage: &dyn KeyValueStorage,
    key: &str,
) -> Result<T, PersistenceError> {
    Ok(storage.get_item(key)?.map_or_else(T::default, |raw| {
        raw.parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "Discarding unreadable stored value");
            T::default()
        })
    }))
}

impl PreferencesStore {
    /// Loads persisted preferences.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read.
    pub fn hydrate(storage: Arc<dyn KeyValueStorage>) -> Result<Self, PersistenceError> {
        let preferences: Preferences = Preferences {
            language: parse_or_default(storage.as_ref(), LANGUAGE_KEY)?,
            theme: parse_or_default(storage.as_ref(), THEME_KEY)?,
        };
        info!(
            language = %preferences.language,
            theme = preferences.theme.as_str(),
            "Hydrated preferences"
        );
        Ok(Self {
            storage,
            state: Mutex::new(preferences),
        })
    }

    /// Returns the current preferences.
    #[must_use]
    pub fn snapshot(&self) -> Preferences {
        *lock(&self.state)
    }

    /// Returns the UI language.
    #[must_use]
    pub fn language(&self) -> Locale {
        lock(&self.state).language
    }

    /// Returns the colour theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        lock(&self.state).theme
    }

    /// Persists a new UI language.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be written.
    pub fn set_language(&self, language: Locale) -> Result<(), PersistenceError> {
        self.storage.set_item(LANGUAGE_KEY, language.as_str())?;
        lock(&self.state).language = language;
        Ok(())
    }

    /// Persists a new colour theme.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be written.
    pub fn set_theme(&self, theme: Theme) -> Result<(), PersistenceError> {
        self.storage.set_item(THEME_KEY, theme.as_str())?;
        lock(&self.state).theme = theme;
        Ok(())
    }
}
