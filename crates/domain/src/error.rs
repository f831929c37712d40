// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::role::{BlockReason, UserRole};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Locale tag is not one of the supported locales.
    UnsupportedLocale(String),
    /// User role string could not be parsed.
    InvalidUserRole(String),
    /// A role switch was rejected by the transition rules.
    RoleSwitchBlocked {
        /// The role the account currently holds.
        from: UserRole,
        /// The role that was requested.
        to: UserRole,
        /// Why the switch was rejected.
        reason: BlockReason,
    },
    /// Day-of-week index outside `0..=6`.
    InvalidDayIndex(u8),
    /// Month index outside `0..=11`.
    InvalidMonthIndex(u8),
    /// Month number or year could not form a calendar month.
    InvalidCalendarMonth {
        /// The year.
        year: i32,
        /// The 1-based month number.
        month: u32,
    },
    /// A `HH:MM` time string could not be parsed.
    InvalidTime(String),
    /// A time range ends before it starts.
    InvalidTimeRange {
        /// Range start (`HH:MM`).
        start: String,
        /// Range end (`HH:MM`).
        end: String,
    },
    /// Reservation status string could not be parsed.
    InvalidReservationStatus(String),
    /// Theme string could not be parsed.
    InvalidTheme(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLocale(tag) => write!(f, "Unsupported locale: {tag}"),
            Self::InvalidUserRole(role) => write!(f, "Invalid user role: {role}"),
            Self::RoleSwitchBlocked { from, to, reason } => {
                write!(f, "Cannot switch role from {from} to {to}: {reason}")
            }
            Self::InvalidDayIndex(index) => {
                write!(f, "Invalid day index: {index}. Must be between 0 and 6")
            }
            Self::InvalidMonthIndex(index) => {
                write!(f, "Invalid month index: {index}. Must be between 0 and 11")
            }
            Self::InvalidCalendarMonth { year, month } => {
                write!(f, "Invalid calendar month: {year}-{month:02}")
            }
            Self::InvalidTime(value) => {
                write!(f, "Invalid time '{value}': expected HH:MM")
            }
            Self::InvalidTimeRange { start, end } => {
                write!(f, "Invalid time range: {end} is not after {start}")
            }
            Self::InvalidReservationStatus(status) => {
                write!(f, "Invalid reservation status: {status}")
            }
            Self::InvalidTheme(theme) => write!(f, "Invalid theme: {theme}"),
        }
    }
}

impl std::error::Error for DomainError {}
