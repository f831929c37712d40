// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Locale-aware calendar tables and day/month index mapping.
//!
//! Two day orderings exist side by side:
//!
//! - **Canonical**: Sunday=0 … Saturday=6. Every persisted schedule uses
//!   this ordering regardless of display locale.
//! - **Display**: Monday=0 … Sunday=6. Calendar grids and the locale
//!   tables below use this ordering.
//!
//! The two are related by the fixed permutation [`DISPLAY_TO_CANONICAL`].
//!
//! Months are always indexed January=0 … December=11; only the names are
//! locale dependent.
//!
//! ## Label resolution
//!
//! A month label can come from a place where it was fixed at creation time
//! (for example a route parameter written in English) or from the active UI.
//! [`resolve_month_index`] searches the canonical English table first for the
//! former and the active locale first for the latter, and finally derives the
//! month from a concrete date rather than failing.

use crate::error::DomainError;
use crate::locale::Locale;
use chrono::{Datelike, NaiveDate};

/// Maps a display column (Monday-first) to a canonical day (Sunday=0).
pub const DISPLAY_TO_CANONICAL: [u8; 7] = [1, 2, 3, 4, 5, 6, 0];

/// Maps a canonical day (Sunday=0) to a display column (Monday-first).
pub const CANONICAL_TO_DISPLAY: [u8; 7] = [6, 0, 1, 2, 3, 4, 5];

/// Month and day names for one locale.
///
/// Day names are Monday-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleCalendarTable {
    /// The locale these names belong to.
    pub locale: Locale,
    /// Full month names, January first.
    pub month_names: [&'static str; 12],
    /// Abbreviated month names, January first.
    pub month_names_short: [&'static str; 12],
    /// Full day names, Monday first.
    pub day_names: [&'static str; 7],
    /// Abbreviated day names, Monday first.
    pub day_names_short: [&'static str; 7],
    /// Label for the current day.
    pub today: &'static str,
}

const EN: LocaleCalendarTable = LocaleCalendarTable {
    locale: Locale::En,
    month_names: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    month_names_short: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    day_names: [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ],
    day_names_short: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
    today: "Today",
};

const RU: LocaleCalendarTable = LocaleCalendarTable {
    locale: Locale::Ru,
    month_names: [
        "Январь",
        "Февраль",
        "Март",
        "Апрель",
        "Май",
        "Июнь",
        "Июль",
        "Август",
        "Сентябрь",
        "Октябрь",
        "Ноябрь",
        "Декабрь",
    ],
    month_names_short: [
        "Янв", "Фев", "Мар", "Апр", "Май", "Июн", "Июл", "Авг", "Сен", "Окт", "Ноя", "Дек",
    ],
    day_names: [
        "Понедельник",
        "Вторник",
        "Среда",
        "Четверг",
        "Пятница",
        "Суббота",
        "Воскресенье",
    ],
    day_names_short: ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"],
    today: "Сегодня",
};

const UZ: LocaleCalendarTable = LocaleCalendarTable {
    locale: Locale::Uz,
    month_names: [
        "Yanvar", "Fevral", "Mart", "Aprel", "May", "Iyun", "Iyul", "Avgust", "Sentabr",
        "Oktabr", "Noyabr", "Dekabr",
    ],
    month_names_short: [
        "Yan", "Fev", "Mar", "Apr", "May", "Iyn", "Iyl", "Avg", "Sen", "Okt", "Noy", "Dek",
    ],
    day_names: [
        "Dushanba",
        "Seshanba",
        "Chorshanba",
        "Payshanba",
        "Juma",
        "Shanba",
        "Yakshanba",
    ],
    day_names_short: ["Du", "Se", "Ch", "Pa", "Ju", "Sh", "Ya"],
    today: "Bugun",
};

/// Returns the calendar table for a locale.
#[must_use]
pub const fn calendar_table(locale: Locale) -> &'static LocaleCalendarTable {
    match locale {
        Locale::En => &EN,
        Locale::Ru => &RU,
        Locale::Uz => &UZ,
    }
}

/// Translates a display column (Monday=0) into a canonical day (Sunday=0).
///
/// # Errors
///
/// Returns `DomainError::InvalidDayIndex` if `display_index > 6`.
pub fn display_index_to_canonical(display_index: u8) -> Result<u8, DomainError> {
    DISPLAY_TO_CANONICAL
        .get(usize::from(display_index))
        .copied()
        .ok_or(DomainError::InvalidDayIndex(display_index))
}

/// Translates a canonical day (Sunday=0) into a display column (Monday=0).
///
/// # Errors
///
/// Returns `DomainError::InvalidDayIndex` if `canonical_day > 6`.
pub fn canonical_to_display_index(canonical_day: u8) -> Result<u8, DomainError> {
    CANONICAL_TO_DISPLAY
        .get(usize::from(canonical_day))
        .copied()
        .ok_or(DomainError::InvalidDayIndex(canonical_day))
}

/// Returns the canonical day (Sunday=0) of a date.
#[must_use]
pub fn canonical_day_of(date: NaiveDate) -> u8 {
    // num_days_from_sunday is always 0..=6
    u8::try_from(date.weekday().num_days_from_sunday()).unwrap_or_default()
}

/// Returns the localized full name of a month.
///
/// # Errors
///
/// Returns `DomainError::InvalidMonthIndex` if `month_index > 11`.
pub fn month_name_for(month_index: u8, locale: Locale) -> Result<&'static str, DomainError> {
    calendar_table(locale)
        .month_names
        .get(usize::from(month_index))
        .copied()
        .ok_or(DomainError::InvalidMonthIndex(month_index))
}

/// Returns the localized full name of a canonical day (Sunday=0).
///
/// # Errors
///
/// Returns `DomainError::InvalidDayIndex` if `canonical_day > 6`.
pub fn day_name_for(canonical_day: u8, locale: Locale) -> Result<&'static str, DomainError> {
    let display: u8 = canonical_to_display_index(canonical_day)?;
    Ok(calendar_table(locale).day_names[usize::from(display)])
}

/// Returns the short day names re-ordered Sunday-first.
///
/// Calendar widgets index their header row by canonical day, so the
/// Monday-first table has to be rotated before being handed over.
#[must_use]
pub fn sunday_first_day_names(locale: Locale) -> [&'static str; 7] {
    let table: &LocaleCalendarTable = calendar_table(locale);
    let mut names: [&'static str; 7] = [""; 7];
    for (canonical, slot) in names.iter_mut().enumerate() {
        *slot = table.day_names_short[usize::from(CANONICAL_TO_DISPLAY[canonical])];
    }
    names
}

fn find_in_table(name: &str, table: &LocaleCalendarTable) -> Option<u8> {
    let needle: String = name.trim().to_lowercase();
    table
        .month_names
        .iter()
        .position(|candidate| candidate.to_lowercase() == needle)
        .or_else(|| {
            table
                .month_names_short
                .iter()
                .position(|candidate| candidate.to_lowercase() == needle)
        })
        .and_then(|index| u8::try_from(index).ok())
}

/// Resolves a month label back to its index (January=0).
///
/// The canonical English table is searched first, then the table of
/// `locale`. Both full and abbreviated names match, case-insensitively.
#[must_use]
pub fn month_index_from_name(name: &str, locale: Locale) -> Option<u8> {
    find_in_table(name, &EN).or_else(|| find_in_table(name, calendar_table(locale)))
}

/// Where a month label was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSource {
    /// Written once in the canonical locale and never re-rendered
    /// (route parameters, persisted labels).
    Fixed,
    /// Rendered in the currently active locale.
    Active,
}

/// Resolves a month label to its index, falling back to `fallback_date`.
///
/// `Fixed` labels search English first and then `locale`; `Active`
/// labels search `locale` first and then English. If neither table
/// contains the label, the month of `fallback_date` is returned.
#[must_use]
pub fn resolve_month_index(
    name: &str,
    locale: Locale,
    source: LabelSource,
    fallback_date: NaiveDate,
) -> u8 {
    let found: Option<u8> = match source {
        LabelSource::Fixed => month_index_from_name(name, locale),
        LabelSource::Active => {
            find_in_table(name, calendar_table(locale)).or_else(|| find_in_table(name, &EN))
        }
    };
    found.unwrap_or_else(|| u8::try_from(fallback_date.month0()).unwrap_or_default())
}

/// One row of a month grid, Monday-first. Days outside the month are `None`.
pub type CalendarWeek = [Option<NaiveDate>; 7];

/// Lays out a calendar month as Monday-first weeks.
///
/// `month` is 1-based (January=1), matching `chrono`.
///
/// # Errors
///
/// Returns `DomainError::InvalidCalendarMonth` if the month does not exist.
pub fn month_grid(year: i32, month: u32) -> Result<Vec<CalendarWeek>, DomainError> {
    let first: NaiveDate = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(DomainError::InvalidCalendarMonth { year, month })?;

    let mut weeks: Vec<CalendarWeek> = Vec::new();
    let mut week: CalendarWeek = [None; 7];
    let mut column: usize = usize::from(CANONICAL_TO_DISPLAY[usize::from(canonical_day_of(first))]);

    for date in first.iter_days().take_while(|d| d.month() == month) {
        week[column] = Some(date);
        column += 1;
        if column == 7 {
            weeks.push(week);
            week = [None; 7];
            column = 0;
        }
    }
    if column != 0 {
        weeks.push(week);
    }

    Ok(weeks)
}
