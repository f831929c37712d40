// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite` implementation of [`KeyValueStorage`].

mod queries;

use diesel::SqliteConnection;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::info;

use crate::backend;
use crate::error::PersistenceError;
use crate::storage::KeyValueStorage;

/// Key-value storage backed by one `SQLite` connection.
pub struct SqliteStorage {
    conn: Mutex<SqliteConnection>,
}

impl std::fmt::Debug for SqliteStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStorage").finish_non_exhaustive()
    }
}

impl SqliteStorage {
    /// Opens (creating if needed) the database at `database_url` and
    /// applies pending migrations.
    ///
    /// File databases are switched to WAL mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection, configuration or migrations fail.
    pub fn open(database_url: &str) -> Result<Self, PersistenceError> {
        let mut conn: SqliteConnection = backend::sqlite::initialize_database(database_url)?;
        if !backend::sqlite::is_in_memory(database_url) {
            backend::sqlite::enable_wal_mode(&mut conn)?;
        }
        info!(database_url, "Opened key-value storage");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Opens a private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if migrations fail.
    pub fn in_memory() -> Result<Self, PersistenceError> {
        Self::open(":memory:")
    }

    fn conn(&self) -> MutexGuard<'_, SqliteConnection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStorage for SqliteStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        queries::select_item(&mut self.conn(), key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        queries::replace_item(&mut self.conn(), key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), PersistenceError> {
        queries::delete_item(&mut self.conn(), key)
    }

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, PersistenceError> {
        queries::select_keys_with_prefix(&mut self.conn(), prefix)
    }
}
