// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-entity server contracts.
//!
//! Each module pairs the reads of one entity (as [`Query`] descriptors)
//! with its writes (as [`BookitClient`] methods). Every write lists the
//! entities it makes stale; the cache drops them before the write returns.
//!
//! [`Query`]: crate::Query
//! [`BookitClient`]: crate::BookitClient

pub mod auth;
pub mod brand;
pub mod experience;
pub mod reservation;
pub mod review;
pub mod schedule;
pub mod search;
pub mod service;
pub mod user;
pub mod worker;

use bookit::{Entity, MutationRequest, Operation};
use serde_json::{Value, json};

/// Builds a write on `entity` that also invalidates `also`.
pub(crate) fn write_request(
    entity: Entity,
    operation: Operation,
    body: Value,
    also: &[Entity],
) -> MutationRequest<Value> {
    MutationRequest::new(entity, operation, body).invalidates_entities(also)
}

/// Body attaching an uploaded file.
pub(crate) fn file_body(file_id: &str) -> Value {
    json!({ "fileId": file_id })
}
