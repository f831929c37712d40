// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{hydrate_json, lock};
use crate::error::PersistenceError;
use crate::storage::{KeyValueStorage, write_json};
use bookit_domain::{RoleState, UserRole};
use std::sync::{Arc, Mutex};
use tracing::info;

/// Storage key of the session token.
pub const TOKEN_KEY: &str = "bookit.session.token";
/// Storage key of the role state.
pub const ROLE_KEY: &str = "bookit.session.role";

/// The signed-in session as last persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    /// Bearer token, absent when signed out.
    pub token: Option<String>,
    /// Local view of the account's role.
    pub role: RoleState,
}

/// Session token and role state.
#[derive(Debug)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStorage>,
    state: Mutex<Session>,
}

impl SessionStore {
    /// Loads the persisted session.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read.
    pub fn hydrate(storage: Arc<dyn KeyValueStorage>) -> Result<Self, PersistenceError> {
        let token: Option<String> = storage.get_item(TOKEN_KEY)?;
        let role: RoleState = hydrate_json(storage.as_ref(), ROLE_KEY)?;
        info!(
            authenticated = token.is_some(),
            role = %role.role(),
            "Hydrated session"
        );
        Ok(Self {
            storage,
            state: Mutex::new(Session { token, role }),
        })
    }

    /// Returns a copy of the current session.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        lock(&self.state).clone()
    }

    /// Returns the bearer token.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        lock(&self.state).token.clone()
    }

    /// Returns the local role state.
    #[must_use]
    pub fn role_state(&self) -> RoleState {
        lock(&self.state).role
    }

    /// Returns whether a token is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        lock(&self.state).token.is_some()
    }

    /// Persists a new session.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be written.
    pub fn sign_in(&self, token: &str, role: RoleState) -> Result<(), PersistenceError> {
        self.storage.set_item(TOKEN_KEY, token)?;
        write_json(self.storage.as_ref(), ROLE_KEY, &role)?;
        let mut state = lock(&self.state);
        state.token = Some(token.to_string());
        state.role = role;
        info!(role = %role.role(), "Session started");
        Ok(())
    }

    /// Persists a new role state.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be written.
    pub fn set_role_state(&self, role: RoleState) -> Result<(), PersistenceError> {
        write_json(self.storage.as_ref(), ROLE_KEY, &role)?;
        lock(&self.state).role = role;
        Ok(())
    }

    /// Overwrites the local role with the server's view. Returns whether
    /// anything changed.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be written.
    pub fn reconcile(&self, role: UserRole, has_brand: bool) -> Result<bool, PersistenceError> {
        let mut next: RoleState = self.role_state();
        if !next.reconcile(role, has_brand) {
            return Ok(false);
        }
        self.set_role_state(next)?;
        info!(role = %role, has_brand, "Role reconciled with server");
        Ok(true)
    }

    /// Forgets the token and role. Memory is reset even if storage fails.
    ///
    /// # Errors
    ///
    /// Returns the first storage error.
    pub fn teardown(&self) -> Result<(), PersistenceError> {
        *lock(&self.state) = Session {
            token: None,
            role: RoleState::guest(),
        };
        let token: Result<(), PersistenceError> = self.storage.remove_item(TOKEN_KEY);
        let role: Result<(), PersistenceError> = self.storage.remove_item(ROLE_KEY);
        info!("Session torn down");
        token.and(role)
    }
}
