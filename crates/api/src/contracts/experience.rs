// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A worker's employment history.

use super::write_request;
use crate::agent::{Agent, Method};
use crate::client::BookitClient;
use crate::error::ApiError;
use crate::query::{Query, to_body};
use bookit::{Entity, Operation, QueryKey};
use bookit_domain::{Experience, ExperienceForm, Validate};
use serde_json::{Value, json};

/// `GET /experiences/me`
#[must_use]
pub fn my_experiences() -> Query<Vec<Experience>> {
    Query::new(QueryKey::lists(Entity::Experience).push("me"), "/experiences/me")
}

/// `GET /experiences/:id`
#[must_use]
pub fn experience(experience_id: &str) -> Query<Experience> {
    Query::new(
        QueryKey::detail(Entity::Experience, json!({ "id": experience_id })),
        format!("/experiences/{experience_id}"),
    )
}

impl<A: Agent> BookitClient<A> {
    /// Adds an experience entry.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for invalid input, or the request
    /// error.
    pub async fn create_experience(&self, form: &ExperienceForm) -> Result<Experience, ApiError> {
        form.validate()?;
        let request = write_request(
            Entity::Experience,
            Operation::Create,
            to_body(form)?,
            &[Entity::Worker],
        );
        self.write(request, Method::Post, "/experiences").await
    }

    /// Changes an experience entry.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for invalid input, or the request
    /// error.
    pub async fn update_experience(
        &self,
        experience_id: &str,
        form: &ExperienceForm,
    ) -> Result<Experience, ApiError> {
        form.validate()?;
        let request = write_request(
            Entity::Experience,
            Operation::Update,
            to_body(form)?,
            &[Entity::Worker],
        );
        self.write(request, Method::Put, &format!("/experiences/{experience_id}"))
            .await
    }

    /// Removes an experience entry.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn delete_experience(&self, experience_id: &str) -> Result<(), ApiError> {
        let request = write_request(
            Entity::Experience,
            Operation::Delete,
            Value::Null,
            &[Entity::Worker],
        );
        let _: Value = self
            .write(request, Method::Delete, &format!("/experiences/{experience_id}"))
            .await?;
        Ok(())
    }
}
