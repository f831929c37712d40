// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::write_request;
use crate::agent::{Agent, Method};
use crate::client::BookitClient;
use crate::error::ApiError;
use crate::query::{Query, to_body};
use bookit::{Entity, Operation, QueryKey};
use bookit_domain::{Review, ReviewForm, Validate};
use serde_json::json;

/// `GET /reviews/worker/:id`
#[must_use]
pub fn worker_reviews(worker_id: &str) -> Query<Vec<Review>> {
    Query::new(
        QueryKey::list(Entity::Review, json!({ "workerId": worker_id })),
        format!("/reviews/worker/{worker_id}"),
    )
}

impl<A: Agent> BookitClient<A> {
    /// Reviews a worker. The worker's rating changes with it.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for invalid input, or the request
    /// error.
    pub async fn create_review(&self, worker_id: &str, form: &ReviewForm) -> Result<Review, ApiError> {
        form.validate()?;
        let request = write_request(
            Entity::Review,
            Operation::Create,
            to_body(form)?,
            &[Entity::Worker],
        );
        self.write(request, Method::Post, &format!("/reviews/worker/{worker_id}"))
            .await
    }
}
