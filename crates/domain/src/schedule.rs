// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Working schedules of brands and workers.
//!
//! ## Invariants
//!
//! - `WorkingDay::day_of_week` is canonical (Sunday=0) regardless of locale
//! - Times are `HH:MM` wall-clock strings as delivered by the backend
//! - A special day off matches a date by year, 1-based month and day

use crate::calendar::canonical_day_of;
use crate::error::DomainError;
use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Parses a `HH:MM` time string.
///
/// # Errors
///
/// Returns `DomainError::InvalidTime` if the string is not a valid time.
pub fn parse_hhmm(value: &str) -> Result<NaiveTime, DomainError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| DomainError::InvalidTime(value.to_string()))
}

fn validate_range(start: &str, end: &str) -> Result<(), DomainError> {
    if parse_hhmm(end)? <= parse_hhmm(start)? {
        return Err(DomainError::InvalidTimeRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    Ok(())
}

/// A break inside a working day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Break {
    /// Break start (`HH:MM`).
    pub start_time: String,
    /// Break end (`HH:MM`).
    pub end_time: String,
}

/// Opening hours for one canonical day of the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingDay {
    /// Canonical day of week (Sunday=0 … Saturday=6).
    pub day_of_week: u8,
    /// Opening time (`HH:MM`).
    pub start_time: String,
    /// Closing time (`HH:MM`).
    pub end_time: String,
    /// Breaks during the day.
    #[serde(default)]
    pub breaks: Vec<Break>,
}

/// A one-off day off on a specific date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialDayOff {
    /// Server identifier, absent until persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Year.
    pub year: i32,
    /// Month, 1-based.
    pub month: u32,
    /// Day of month.
    pub day: u32,
    /// Start of the unavailable period (`HH:MM`).
    pub start_time: String,
    /// End of the unavailable period (`HH:MM`).
    pub end_time: String,
}

impl SpecialDayOff {
    /// Returns the calendar date of this day off, if it exists.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// Returns whether this day off falls on `date`.
    #[must_use]
    pub fn falls_on(&self, date: NaiveDate) -> bool {
        self.year == date.year() && self.month == date.month() && self.day == date.day()
    }
}

/// The working schedule of a brand, or of one worker within a brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntity {
    /// Server identifier.
    pub id: String,
    /// The owning user, when the schedule belongs to a worker.
    #[serde(default)]
    pub owner_user_id: Option<String>,
    /// The brand the schedule belongs to.
    pub owner_brand_id: String,
    /// Weekly opening hours.
    #[serde(default)]
    pub working_days: Vec<WorkingDay>,
    /// One-off days off.
    #[serde(default)]
    pub days_off: Vec<SpecialDayOff>,
}

impl ScheduleEntity {
    /// Returns the working hours for the weekday of `date`, if any.
    #[must_use]
    pub fn working_day_for(&self, date: NaiveDate) -> Option<&WorkingDay> {
        let day: u8 = canonical_day_of(date);
        self.working_days.iter().find(|wd| wd.day_of_week == day)
    }

    /// Returns whether `date` is a day off.
    ///
    /// A date is off when no working day exists for its weekday or a
    /// special day off falls on it.
    #[must_use]
    pub fn is_day_off(&self, date: NaiveDate) -> bool {
        self.working_day_for(date).is_none() || self.days_off.iter().any(|d| d.falls_on(date))
    }

    /// Returns every working date of a calendar month (1-based `month`).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCalendarMonth` if the month does not exist.
    pub fn working_dates_in_month(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Vec<NaiveDate>, DomainError> {
        let first: NaiveDate = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(DomainError::InvalidCalendarMonth { year, month })?;
        Ok(first
            .iter_days()
            .take_while(|d| d.month() == month)
            .filter(|d| !self.is_day_off(*d))
            .collect())
    }
}

/// Validates the structural invariants of a schedule.
///
/// # Errors
///
/// Returns an error if:
/// - A `day_of_week` is outside `0..=6`
/// - A time is not `HH:MM`
/// - A working day, break or day off ends before it starts
pub fn validate_schedule(schedule: &ScheduleEntity) -> Result<(), DomainError> {
    for working_day in &schedule.working_days {
        if working_day.day_of_week > 6 {
            return Err(DomainError::InvalidDayIndex(working_day.day_of_week));
        }
        validate_range(&working_day.start_time, &working_day.end_time)?;
        for br in &working_day.breaks {
            validate_range(&br.start_time, &br.end_time)?;
        }
    }

    for day_off in &schedule.days_off {
        if day_off.date().is_none() {
            return Err(DomainError::InvalidCalendarMonth {
                year: day_off.year,
                month: day_off.month,
            });
        }
        validate_range(&day_off.start_time, &day_off.end_time)?;
    }

    Ok(())
}
