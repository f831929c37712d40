// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The persisted key-value collaborator.
//!
//! Values are opaque strings. Structured values are stored as JSON through
//! [`read_json`] and [`write_json`].

use crate::error::PersistenceError;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// String key-value storage that survives process restarts.
pub trait KeyValueStorage: Send + Sync + std::fmt::Debug {
    /// Returns the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistenceError>;

    /// Removes `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove_item(&self, key: &str) -> Result<(), PersistenceError>;

    /// Lists stored keys that start with `prefix`, in key order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, PersistenceError>;
}

/// Reads and decodes a JSON value.
///
/// # Errors
///
/// Returns an error if the backend fails or the stored value does not
/// decode as `T`.
pub fn read_json<T: DeserializeOwned>(
    storage: &dyn KeyValueStorage,
    key: &str,
) -> Result<Option<T>, PersistenceError> {
    storage
        .get_item(key)?
        .map(|raw| {
            serde_json::from_str(&raw).map_err(|e| PersistenceError::SerializationError {
                key: key.to_string(),
                message: e.to_string(),
            })
        })
        .transpose()
}

/// Encodes and stores a JSON value.
///
/// # Errors
///
/// Returns an error if `value` cannot be encoded or the backend fails.
pub fn write_json<T: Serialize>(
    storage: &dyn KeyValueStorage,
    key: &str,
    value: &T,
) -> Result<(), PersistenceError> {
    let raw: String =
        serde_json::to_string(value).map_err(|e| PersistenceError::SerializationError {
            key: key.to_string(),
            message: e.to_string(),
        })?;
    storage.set_item(key, &raw)
}
