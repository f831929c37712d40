// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The signed-in worker and worker photos.

use super::{file_body, write_request};
use crate::agent::{Agent, FileUpload, Method};
use crate::client::BookitClient;
use crate::error::ApiError;
use crate::query::{Query, to_body};
use bookit::{Entity, Operation, QueryKey};
use bookit_domain::{UploadedFile, Validate, Worker, WorkerForm};
use serde_json::{Value, json};

/// `GET /workers/me`
#[must_use]
pub fn my_worker() -> Query<Worker> {
    Query::new(QueryKey::details(Entity::Worker).push("me"), "/workers/me")
}

/// `GET /workers/:id/photos`
///
/// Unlike days off, a missing photo collection is reported as an error.
#[must_use]
pub fn worker_photos(worker_id: &str) -> Query<Vec<UploadedFile>> {
    Query::new(
        QueryKey::scoped(Entity::Worker, "photos", json!({ "workerId": worker_id })),
        format!("/workers/{worker_id}/photos"),
    )
}

impl<A: Agent> BookitClient<A> {
    /// Updates the signed-in worker.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for invalid input, or the request
    /// error.
    pub async fn update_worker(&self, form: &WorkerForm) -> Result<Worker, ApiError> {
        form.validate()?;
        let request = write_request(
            Entity::Worker,
            Operation::Update,
            to_body(form)?,
            &[Entity::Brand],
        );
        self.write(request, Method::Put, "/workers/me").await
    }

    /// Uploads a photo and attaches it to a worker.
    ///
    /// # Errors
    ///
    /// Returns the upload or request error.
    pub async fn add_worker_photo(
        &self,
        worker_id: &str,
        file: FileUpload,
    ) -> Result<UploadedFile, ApiError> {
        let uploaded: UploadedFile = self.upload(file).await?;
        let request = write_request(
            Entity::Worker,
            Operation::Create,
            file_body(&uploaded.id),
            &[],
        );
        let _: Value = self
            .write(request, Method::Post, &format!("/workers/{worker_id}/photos"))
            .await?;
        Ok(uploaded)
    }
}
