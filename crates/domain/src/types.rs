// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::role::UserRole;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The signed-in account as returned by `/user/profile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Server identifier.
    pub id: String,
    /// Phone number used to sign in.
    pub phone: String,
    /// Display name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Avatar URL.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// The role the server considers active.
    pub role: UserRole,
    /// Whether the account owns a brand.
    #[serde(default)]
    pub has_brand: bool,
}

/// A business (salon, barber, spa, clinic, studio).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    /// Server identifier.
    pub id: String,
    /// The owning user.
    pub owner_user_id: String,
    /// Display name.
    pub name: String,
    /// Business category (e.g. `barber`).
    pub category: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Street address.
    #[serde(default)]
    pub address: Option<String>,
    /// Gallery photos.
    #[serde(default)]
    pub photos: Vec<UploadedFile>,
    /// Average review rating.
    #[serde(default)]
    pub rating: Option<f32>,
}

/// A staff member working under a brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    /// Server identifier.
    pub id: String,
    /// The worker's user account.
    pub user_id: String,
    /// The brand employing the worker.
    pub brand_id: String,
    /// Display name.
    pub full_name: String,
    /// Job title.
    #[serde(default)]
    pub position: Option<String>,
    /// Average review rating.
    #[serde(default)]
    pub rating: Option<f32>,
}

/// A bookable service offered by a brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Server identifier.
    pub id: String,
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

/// A past job entry on a worker's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    /// Server identifier.
    pub id: String,
    /// Company or salon name.
    pub company: String,
    /// Job title.
    pub position: String,
    /// Start year.
    pub from_year: i32,
    /// End year, `None` while ongoing.
    #[serde(default)]
    pub to_year: Option<i32>,
}

/// A customer review of a worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Server identifier.
    pub id: String,
    /// The reviewed worker.
    pub worker_id: String,
    /// The reviewing user.
    pub author_user_id: String,
    /// Rating from 1 to 5.
    pub rating: u8,
    /// Review text.
    #[serde(default)]
    pub comment: Option<String>,
}

/// Lifecycle of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReservationStatus {
    /// Created, awaiting confirmation by the brand.
    #[default]
    Pending,
    /// Confirmed by the brand.
    Confirmed,
    /// Cancelled by either side.
    Cancelled,
    /// The appointment took place.
    Completed,
}

impl ReservationStatus {
    /// Converts this status to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
            Self::Completed => "COMPLETED",
        }
    }

    /// Returns whether a reservation in this status can still be cancelled.
    #[must_use]
    pub const fn is_cancellable(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }
}

impl FromStr for ReservationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "CONFIRMED" => Ok(Self::Confirmed),
            "CANCELLED" => Ok(Self::Cancelled),
            "COMPLETED" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidReservationStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A booked appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Server identifier.
    pub id: String,
    /// The booking user.
    pub user_id: String,
    /// The brand booked at.
    pub brand_id: String,
    /// The worker booked with, if chosen.
    #[serde(default)]
    pub worker_id: Option<String>,
    /// The booked service.
    pub service_id: String,
    /// Appointment date (`YYYY-MM-DD`).
    pub date: String,
    /// Appointment start (`HH:MM`).
    pub start_time: String,
    /// Current status.
    #[serde(default)]
    pub status: ReservationStatus,
}

/// A file stored by the upload collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    /// Server identifier.
    pub id: String,
    /// Public URL.
    pub url: String,
}

/// One page of a cursor-paginated collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Cursor for the next page, absent on the last page.
    #[serde(default)]
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    /// Returns whether another page can be requested.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_cursor: None,
        }
    }
}

/// Colour scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light colours.
    Light,
    /// Dark colours.
    Dark,
    /// Follow the operating system.
    #[default]
    System,
}

impl Theme {
    /// Converts this theme to its persisted representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl FromStr for Theme {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            _ => Err(DomainError::InvalidTheme(s.to_string())),
        }
    }
}
