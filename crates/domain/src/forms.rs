// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User-entered form payloads.
//!
//! These are the bodies submitted to mutation endpoints. They are validated
//! with [`crate::Validate`] before leaving the device and persisted as
//! drafts while the user is still editing them.

use serde::{Deserialize, Serialize};

/// Phone sign-in request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    /// Phone number in international format.
    pub phone: String,
}

/// One-time code confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCodeForm {
    /// Phone number the code was sent to.
    pub phone: String,
    /// The received code.
    pub code: String,
}

/// New account registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    /// Phone number in international format.
    pub phone: String,
    /// Display name.
    pub full_name: String,
}

/// Profile edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileForm {
    /// Display name.
    pub full_name: String,
    /// Avatar file id from the upload collaborator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_file_id: Option<String>,
}

/// Brand create/edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BrandForm {
    /// Display name.
    pub name: String,
    /// Business category.
    pub category: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Street address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Service create/edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServiceForm {
    /// The brand offering the service.
    pub brand_id: String,
    /// Display name.
    pub name: String,
    /// Price in minor currency units.
    pub price: u64,
    /// Duration in minutes.
    pub duration_minutes: u32,
    /// Workers who can perform the service.
    #[serde(default)]
    pub worker_ids: Vec<String>,
}

/// Worker profile edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WorkerForm {
    /// Display name.
    pub full_name: String,
    /// Job title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

/// Work experience create/edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceForm {
    /// Company or salon name.
    pub company: String,
    /// Job title.
    pub position: String,
    /// Start year.
    pub from_year: i32,
    /// End year, `None` while ongoing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_year: Option<i32>,
}

/// Review submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReviewForm {
    /// Rating from 1 to 5.
    pub rating: u8,
    /// Review text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Reservation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReservationForm {
    /// The brand to book at.
    pub brand_id: String,
    /// The service to book.
    pub service_id: String,
    /// Preferred worker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker_id: Option<String>,
    /// Appointment date (`YYYY-MM-DD`).
    pub date: String,
    /// Appointment start (`HH:MM`).
    pub start_time: String,
}
