// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Phone sign-in, registration and sign-out.

use super::write_request;
use crate::agent::{Agent, Method};
use crate::client::BookitClient;
use crate::error::ApiError;
use crate::query::to_body;
use bookit::{Entity, Operation};
use bookit_domain::{LoginForm, RegisterForm, RoleState, UserProfile, Validate, VerifyCodeForm};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

/// A session issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    /// Bearer token.
    pub token: String,
    /// The signed-in account.
    pub user: UserProfile,
}

impl<A: Agent> BookitClient<A> {
    /// Requests a one-time code for `form.phone`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for a malformed phone number, or the
    /// request error.
    pub async fn login(&self, form: &LoginForm) -> Result<(), ApiError> {
        form.validate()?;
        let request = write_request(
            Entity::Auth,
            Operation::Create,
            to_body(form)?,
            &[Entity::User],
        );
        let _: Value = self.write(request, Method::Post, "/auth/login").await?;
        Ok(())
    }

    /// Exchanges a one-time code for a session and persists it.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for a malformed code, the request
    /// error, or a storage error if the session cannot be persisted.
    pub async fn verify(&self, form: &VerifyCodeForm) -> Result<AuthSession, ApiError> {
        form.validate()?;
        let request = write_request(
            Entity::Auth,
            Operation::Create,
            to_body(form)?,
            &[Entity::User],
        );
        let session: AuthSession = self.write(request, Method::Post, "/auth/verify").await?;
        self.begin_session(&session)?;
        Ok(session)
    }

    /// Creates an account and persists its session.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for invalid input, the request
    /// error, or a storage error if the session cannot be persisted.
    pub async fn register(&self, form: &RegisterForm) -> Result<AuthSession, ApiError> {
        form.validate()?;
        let request = write_request(
            Entity::Auth,
            Operation::Create,
            to_body(form)?,
            &[Entity::User],
        );
        let session: AuthSession = self.write(request, Method::Post, "/auth/register").await?;
        self.begin_session(&session)?;
        Ok(session)
    }

    /// Signs out. The local session and cache are cleared even when the
    /// backend cannot be reached.
    pub async fn logout(&self) {
        let request = write_request(Entity::Auth, Operation::Delete, Value::Null, &[]);
        let result: Result<Value, ApiError> =
            self.write(request, Method::Post, "/auth/logout").await;
        if let Err(err) = result {
            warn!(%err, "Logout request failed, signing out locally");
        }
        self.teardown_session();
    }

    fn begin_session(&self, session: &AuthSession) -> Result<(), ApiError> {
        let has_invite_code: bool = self.stores().session.role_state().has_invite_code();
        let role: RoleState =
            RoleState::new(session.user.role, session.user.has_brand, has_invite_code);
        self.start_session(&session.token, role)?;
        info!(user_id = %session.user.id, role = %session.user.role, "Signed in");
        Ok(())
    }
}
