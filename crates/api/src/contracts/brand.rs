// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Businesses and their photos.

use super::{file_body, write_request};
use crate::agent::{Agent, FileUpload, Method};
use crate::client::BookitClient;
use crate::error::ApiError;
use crate::query::{Query, to_body, with_query};
use bookit::{Entity, Operation, QueryKey};
use bookit_domain::{Brand, BrandForm, RoleState, UploadedFile, Validate, Worker};
use serde_json::{Value, json};

/// Entities a brand deletion makes stale.
pub const DELETE_BRAND_INVALIDATES: [Entity; 4] = [
    Entity::Worker,
    Entity::Service,
    Entity::Schedule,
    Entity::User,
];

/// `GET /brand/me`
#[must_use]
pub fn my_brand() -> Query<Brand> {
    Query::new(QueryKey::details(Entity::Brand).push("me"), "/brand/me")
}

/// `GET /brand/:id`
#[must_use]
pub fn brand(brand_id: &str) -> Query<Brand> {
    Query::new(
        QueryKey::detail(Entity::Brand, json!({ "id": brand_id })),
        format!("/brand/{brand_id}"),
    )
}

/// `GET /brand/:id/workers`, cached with the other worker lists.
#[must_use]
pub fn brand_workers(brand_id: &str) -> Query<Vec<Worker>> {
    Query::new(
        QueryKey::list(Entity::Worker, json!({ "brandId": brand_id })),
        format!("/brand/{brand_id}/workers"),
    )
}

impl<A: Agent> BookitClient<A> {
    /// Creates the signed-in user's brand.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for invalid input, the request
    /// error, or a storage error.
    pub async fn create_brand(&self, form: &BrandForm) -> Result<Brand, ApiError> {
        form.validate()?;
        let request = write_request(
            Entity::Brand,
            Operation::Create,
            to_body(form)?,
            &[Entity::User],
        );
        let brand: Brand = self.write(request, Method::Post, "/brand").await?;
        self.note_brand_ownership(true)?;
        Ok(brand)
    }

    /// Updates a brand.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for invalid input, or the request
    /// error.
    pub async fn update_brand(&self, brand_id: &str, form: &BrandForm) -> Result<Brand, ApiError> {
        form.validate()?;
        let request = write_request(
            Entity::Brand,
            Operation::Update,
            to_body(form)?,
            &[Entity::User],
        );
        self.write(request, Method::Put, &format!("/brand/{brand_id}"))
            .await
    }

    /// Deletes a brand. Its workers, services and schedules go with it.
    ///
    /// # Errors
    ///
    /// Returns the request error, or a storage error.
    pub async fn delete_brand(&self, brand_id: &str) -> Result<(), ApiError> {
        let request = write_request(
            Entity::Brand,
            Operation::Delete,
            Value::Null,
            &DELETE_BRAND_INVALIDATES,
        );
        let _: Value = self
            .write(request, Method::Delete, &format!("/brand/{brand_id}"))
            .await?;
        self.note_brand_ownership(false)?;
        Ok(())
    }

    /// Uploads a photo and attaches it to a brand.
    ///
    /// # Errors
    ///
    /// Returns the upload or request error.
    pub async fn add_brand_photo(
        &self,
        brand_id: &str,
        file: FileUpload,
    ) -> Result<UploadedFile, ApiError> {
        let uploaded: UploadedFile = self.upload(file).await?;
        let request = write_request(
            Entity::Brand,
            Operation::Create,
            file_body(&uploaded.id),
            &[],
        );
        let _: Value = self
            .write(request, Method::Post, &format!("/brand/{brand_id}/photos"))
            .await?;
        Ok(uploaded)
    }

    /// Detaches a photo from a brand.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn remove_brand_photo(&self, brand_id: &str, file_id: &str) -> Result<(), ApiError> {
        let path: String = with_query(
            &format!("/brand/{brand_id}/photos"),
            &[("fileId", Some(file_id))],
        )?;
        let request = write_request(Entity::Brand, Operation::Delete, Value::Null, &[]);
        let _: Value = self.write(request, Method::Delete, &path).await?;
        Ok(())
    }

    fn note_brand_ownership(&self, has_brand: bool) -> Result<(), ApiError> {
        let mut role: RoleState = self.stores().session.role_state();
        if role.has_brand() != has_brand {
            role.set_has_brand(has_brand);
            self.stores().session.set_role_state(role)?;
        }
        Ok(())
    }
}
