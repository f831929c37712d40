// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The signed-in account.

use super::write_request;
use crate::agent::{Agent, Method};
use crate::client::BookitClient;
use crate::error::ApiError;
use crate::query::{Query, to_body};
use bookit::{Entity, Operation, QueryKey};
use bookit_domain::{ProfileForm, RoleState, UserProfile, UserRole, Validate};
use serde_json::json;
use tracing::info;

/// Key of the signed-in profile.
#[must_use]
pub fn profile_key() -> QueryKey {
    QueryKey::all(Entity::User).push("profile")
}

/// `GET /user/profile`
#[must_use]
pub fn profile() -> Query<UserProfile> {
    Query::new(profile_key(), "/user/profile")
}

impl<A: Agent> BookitClient<A> {
    /// Updates the profile.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for invalid input, or the request
    /// error.
    pub async fn update_profile(&self, form: &ProfileForm) -> Result<UserProfile, ApiError> {
        form.validate()?;
        let request = write_request(Entity::User, Operation::Update, to_body(form)?, &[])
            .replaces(profile_key());
        self.write(request, Method::Put, "/user/profile").await
    }

    /// Reloads the profile and adopts the server's role as authoritative.
    ///
    /// # Errors
    ///
    /// Returns the request error, or a storage error if the role cannot be
    /// persisted.
    pub async fn refresh_session(&self) -> Result<UserProfile, ApiError> {
        let profile: UserProfile = self.load(profile()).await?;
        self.stores()
            .session
            .reconcile(profile.role, profile.has_brand)?;
        Ok(profile)
    }

    /// Switches the account to `to`.
    ///
    /// The switch is checked locally first; a blocked switch is never sent.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::RoleSwitchBlocked` if the transition rules reject
    /// it, the request error, or a storage error.
    pub async fn switch_role(&self, to: UserRole) -> Result<UserProfile, ApiError> {
        let current: RoleState = self.stores().session.role_state();
        current.check_switch(to)?;
        let request = write_request(
            Entity::User,
            Operation::Update,
            json!({ "role": to }),
            &[Entity::Brand, Entity::Worker],
        )
        .replaces(profile_key());
        let profile: UserProfile = self.write(request, Method::Put, "/user/role").await?;
        self.stores()
            .session
            .reconcile(profile.role, profile.has_brand)?;
        info!(from = %current.role(), to = %profile.role, "Role switched");
        Ok(profile)
    }
}
