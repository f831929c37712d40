// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Working schedules and days off.
//!
//! A schedule belongs to a brand, or to one worker of a brand. Days off
//! are a secondary collection: a schedule that never had one answers 404,
//! which reads as an empty list.

use super::write_request;
use crate::agent::{Agent, Method};
use crate::client::BookitClient;
use crate::error::ApiError;
use crate::query::{Query, to_body, with_query};
use bookit::{Entity, Operation, QueryKey};
use bookit_domain::{ScheduleEntity, SpecialDayOff, Validate};
use serde_json::{Value, json};

fn schedule_path(brand_id: &str, worker_id: Option<&str>) -> String {
    worker_id.map_or_else(
        || format!("/schedules/{brand_id}"),
        |worker_id| format!("/schedules/{brand_id}/worker/{worker_id}"),
    )
}

fn days_off_path(schedule_id: &str) -> String {
    format!("/schedules/{schedule_id}/days-off")
}

/// `GET /schedules/:brandId[/worker/:workerId]`
#[must_use]
pub fn schedule(brand_id: &str, worker_id: Option<&str>) -> Query<ScheduleEntity> {
    Query::new(
        QueryKey::detail(
            Entity::Schedule,
            json!({ "brandId": brand_id, "workerId": worker_id }),
        ),
        schedule_path(brand_id, worker_id),
    )
}

/// `GET /schedules/:scheduleId/days-off`; a 404 reads as no days off.
#[must_use]
pub fn days_off(schedule_id: &str) -> Query<Vec<SpecialDayOff>> {
    Query::new(
        QueryKey::scoped(Entity::Schedule, "daysOff", json!({ "scheduleId": schedule_id })),
        days_off_path(schedule_id),
    )
    .empty_on_not_found()
}

impl<A: Agent> BookitClient<A> {
    /// Replaces a schedule.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for malformed days or times, or the
    /// request error.
    pub async fn update_schedule(
        &self,
        brand_id: &str,
        worker_id: Option<&str>,
        schedule: &ScheduleEntity,
    ) -> Result<ScheduleEntity, ApiError> {
        schedule.validate()?;
        let request = write_request(Entity::Schedule, Operation::Update, to_body(schedule)?, &[]);
        self.write(request, Method::Put, &schedule_path(brand_id, worker_id))
            .await
    }

    /// Adds a day off.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn add_day_off(
        &self,
        schedule_id: &str,
        day_off: &SpecialDayOff,
    ) -> Result<SpecialDayOff, ApiError> {
        let request = write_request(Entity::Schedule, Operation::Create, to_body(day_off)?, &[]);
        self.write(request, Method::Post, &days_off_path(schedule_id))
            .await
    }

    /// Removes a day off.
    ///
    /// # Errors
    ///
    /// Returns the request error.
    pub async fn remove_day_off(&self, schedule_id: &str, day_off_id: &str) -> Result<(), ApiError> {
        let path: String = with_query(&days_off_path(schedule_id), &[("dayOffId", Some(day_off_id))])?;
        let request = write_request(Entity::Schedule, Operation::Delete, Value::Null, &[]);
        let _: Value = self.write(request, Method::Delete, &path).await?;
        Ok(())
    }
}
