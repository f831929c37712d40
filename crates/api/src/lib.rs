// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

//! The Bookit client surface.
//!
//! [`BookitClient`] pairs an [`Agent`] (the HTTP collaborator) with the
//! query cache and the persisted stores. Reads are described by
//! [`Query`] values from [`contracts`]; writes are client methods that
//! validate their input, send it, and settle the cache before returning.
//! Every surfaced error goes through one [`ErrorHandler`].

mod agent;
mod client;
pub mod contracts;
mod error;
mod notifications;
mod query;
mod telemetry;

#[cfg(test)]
mod tests;

pub use agent::{Agent, FileUpload, Method};
pub use client::BookitClient;
pub use contracts::auth::AuthSession;
pub use contracts::search::SearchPager;
pub use error::{ApiError, translate_core_error, translate_domain_error, translate_request_error};
pub use notifications::{ErrorHandler, Notification, NotificationLevel, notification_for};
pub use query::{Query, Subscription};
pub use telemetry::init_logging;
