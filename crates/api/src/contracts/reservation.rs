// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bookings. A booking occupies schedule time, so every write here also
//! makes schedules stale.

use super::write_request;
use crate::agent::{Agent, Method};
use crate::client::BookitClient;
use crate::error::ApiError;
use crate::query::{Query, to_body};
use bookit::{Entity, Operation, QueryKey};
use bookit_domain::{Reservation, ReservationForm, Validate};
use serde_json::Value;

/// `GET /reservations/me`
#[must_use]
pub fn my_reservations() -> Query<Vec<Reservation>> {
    Query::new(
        QueryKey::lists(Entity::Reservation).push("me"),
        "/reservations/me",
    )
}

impl<A: Agent> BookitClient<A> {
    /// Books an appointment.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for invalid input, or the request
    /// error.
    pub async fn create_reservation(
        &self,
        form: &ReservationForm,
    ) -> Result<Reservation, ApiError> {
        form.validate()?;
        let request = write_request(
            Entity::Reservation,
            Operation::Create,
            to_body(form)?,
            &[Entity::Schedule],
        );
        self.write(request, Method::Post, "/reservations").await
    }

    /// Cancels a booking.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn cancel_reservation(&self, reservation_id: &str) -> Result<Reservation, ApiError> {
        let request = write_request(
            Entity::Reservation,
            Operation::Update,
            Value::Null,
            &[Entity::Schedule],
        );
        self.write(
            request,
            Method::Put,
            &format!("/reservations/{reservation_id}/cancel"),
        )
        .await
    }
}
