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

mod calendar;
mod error;
mod forms;
mod locale;
mod role;
mod schedule;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use calendar::{
    CANONICAL_TO_DISPLAY, CalendarWeek, DISPLAY_TO_CANONICAL, LabelSource, LocaleCalendarTable,
    calendar_table, canonical_day_of, canonical_to_display_index, day_name_for,
    display_index_to_canonical, month_grid, month_index_from_name, month_name_for,
    resolve_month_index, sunday_first_day_names,
};
pub use error::DomainError;
pub use forms::{
    BrandForm, ExperienceForm, LoginForm, ProfileForm, RegisterForm, ReservationForm, ReviewForm,
    ServiceForm, VerifyCodeForm, WorkerForm,
};
pub use locale::Locale;
pub use role::{BlockReason, RoleState, UserRole, next_role_allowed};
pub use schedule::{
    Break, ScheduleEntity, SpecialDayOff, WorkingDay, parse_hhmm, validate_schedule,
};
pub use types::{
    Brand, Experience, Page, Reservation, ReservationStatus, Review, Service, Theme,
    UploadedFile, UserProfile, Worker,
};
pub use validation::{
    Validate, ValidationCode, ValidationError, is_valid_phone, validation_message,
};
