// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bookable services.

use super::write_request;
use crate::agent::{Agent, Method};
use crate::client::BookitClient;
use crate::error::ApiError;
use crate::query::{Query, to_body, with_query};
use bookit::{Entity, Operation, QueryKey};
use bookit_domain::{Service, ServiceForm, Validate};
use serde_json::{Value, json};

/// `GET /services?brandId=`
///
/// # Errors
///
/// Returns an error if the query string cannot be encoded.
pub fn services(brand_id: &str) -> Result<Query<Vec<Service>>, ApiError> {
    Ok(Query::new(
        QueryKey::list(Entity::Service, json!({ "brandId": brand_id })),
        with_query("/services", &[("brandId", Some(brand_id))])?,
    ))
}

/// `GET /services/:id`
#[must_use]
pub fn service(service_id: &str) -> Query<Service> {
    Query::new(
        QueryKey::detail(Entity::Service, json!({ "id": service_id })),
        format!("/services/{service_id}"),
    )
}

impl<A: Agent> BookitClient<A> {
    /// Creates a service.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for invalid input, or the request
    /// error.
    pub async fn create_service(&self, form: &ServiceForm) -> Result<Service, ApiError> {
        form.validate()?;
        let request = write_request(
            Entity::Service,
            Operation::Create,
            to_body(form)?,
            &[Entity::Search],
        );
        self.write(request, Method::Post, "/services").await
    }

    /// Updates a service.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for invalid input, or the request
    /// error.
    pub async fn update_service(
        &self,
        service_id: &str,
        form: &ServiceForm,
    ) -> Result<Service, ApiError> {
        form.validate()?;
        let request = write_request(
            Entity::Service,
            Operation::Update,
            to_body(form)?,
            &[Entity::Search],
        );
        self.write(request, Method::Put, &format!("/services/{service_id}"))
            .await
    }

    /// Deletes a service.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn delete_service(&self, service_id: &str) -> Result<(), ApiError> {
        let request = write_request(
            Entity::Service,
            Operation::Delete,
            Value::Null,
            &[Entity::Search],
        );
        let _: Value = self
            .write(request, Method::Delete, &format!("/services/{service_id}"))
            .await?;
        Ok(())
    }
}
