// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, LabelSource, Locale, calendar_table, canonical_day_of,
    canonical_to_display_index, day_name_for, display_index_to_canonical, month_grid,
    month_index_from_name, month_name_for, resolve_month_index, sunday_first_day_names,
};
use chrono::NaiveDate;

#[test]
fn test_display_to_canonical_round_trip() {
    for display in 0..7u8 {
        let canonical: u8 = display_index_to_canonical(display).unwrap();
        assert_eq!(canonical_to_display_index(canonical).unwrap(), display);
    }
}

#[test]
fn test_sunday_is_last_display_column() {
    assert_eq!(canonical_to_display_index(0), Ok(6));
    assert_eq!(display_index_to_canonical(6), Ok(0));
    assert_eq!(display_index_to_canonical(0), Ok(1));
}

#[test]
fn test_out_of_range_day_index_is_rejected() {
    assert_eq!(
        display_index_to_canonical(7),
        Err(DomainError::InvalidDayIndex(7))
    );
    assert_eq!(
        canonical_to_display_index(9),
        Err(DomainError::InvalidDayIndex(9))
    );
}

#[test]
fn test_canonical_day_of_date() {
    // 2026-03-01 is a Sunday
    let sunday: NaiveDate = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    assert_eq!(canonical_day_of(sunday), 0);
    let wednesday: NaiveDate = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
    assert_eq!(canonical_day_of(wednesday), 3);
}

#[test]
fn test_month_name_lookup() {
    assert_eq!(month_name_for(0, Locale::En), Ok("January"));
    assert_eq!(month_name_for(0, Locale::Ru), Ok("Январь"));
    assert_eq!(month_name_for(11, Locale::Uz), Ok("Dekabr"));
    assert_eq!(
        month_name_for(12, Locale::En),
        Err(DomainError::InvalidMonthIndex(12))
    );
}

#[test]
fn test_english_month_names_resolve_under_every_locale() {
    for locale in Locale::ALL {
        for month in 0..12u8 {
            let name: &str = month_name_for(month, Locale::En).unwrap();
            assert_eq!(month_index_from_name(name, locale), Some(month));
        }
    }
}

#[test]
fn test_localized_month_names_resolve_under_their_locale() {
    for locale in Locale::ALL {
        for month in 0..12u8 {
            let name: &str = month_name_for(month, locale).unwrap();
            assert_eq!(month_index_from_name(name, locale), Some(month));
        }
    }
}

#[test]
fn test_month_lookup_accepts_short_names_and_any_case() {
    assert_eq!(month_index_from_name("feb", Locale::En), Some(1));
    assert_eq!(month_index_from_name("СЕНТЯБРЬ", Locale::Ru), Some(8));
    assert_eq!(month_index_from_name("Okt", Locale::Uz), Some(9));
}

#[test]
fn test_month_lookup_misses_other_locale_names() {
    assert_eq!(month_index_from_name("Сентябрь", Locale::Uz), None);
}

#[test]
fn test_resolve_month_index_falls_back_to_date() {
    let fallback: NaiveDate = NaiveDate::from_ymd_opt(2026, 7, 15).unwrap();
    assert_eq!(
        resolve_month_index("Brumaire", Locale::Ru, LabelSource::Fixed, fallback),
        6
    );
    assert_eq!(
        resolve_month_index("Brumaire", Locale::En, LabelSource::Active, fallback),
        6
    );
}

#[test]
fn test_resolve_month_index_for_fixed_and_active_labels() {
    let fallback: NaiveDate = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    assert_eq!(
        resolve_month_index("March", Locale::Ru, LabelSource::Fixed, fallback),
        2
    );
    assert_eq!(
        resolve_month_index("Март", Locale::Ru, LabelSource::Active, fallback),
        2
    );
    assert_eq!(
        resolve_month_index("March", Locale::Uz, LabelSource::Active, fallback),
        2
    );
}

#[test]
fn test_day_names_follow_canonical_index() {
    assert_eq!(day_name_for(0, Locale::En), Ok("Sunday"));
    assert_eq!(day_name_for(1, Locale::Ru), Ok("Понедельник"));
    assert_eq!(day_name_for(6, Locale::Uz), Ok("Shanba"));
}

#[test]
fn test_sunday_first_day_names() {
    assert_eq!(
        sunday_first_day_names(Locale::En),
        ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
    );
    assert_eq!(sunday_first_day_names(Locale::Ru)[0], "Вс");
}

#[test]
fn test_every_table_is_complete() {
    for locale in Locale::ALL {
        let table = calendar_table(locale);
        assert_eq!(table.locale, locale);
        assert!(table.month_names.iter().all(|n| !n.is_empty()));
        assert!(table.day_names_short.iter().all(|n| !n.is_empty()));
    }
}

#[test]
fn test_month_grid_is_monday_first() {
    // March 2026 starts on a Sunday and has 31 days
    let weeks = month_grid(2026, 3).unwrap();
    assert_eq!(weeks.len(), 6);
    assert_eq!(weeks[0][..6], [None; 6]);
    assert_eq!(weeks[0][6], NaiveDate::from_ymd_opt(2026, 3, 1));
    assert_eq!(weeks[1][0], NaiveDate::from_ymd_opt(2026, 3, 2));
    let days: usize = weeks.iter().flatten().filter(|d| d.is_some()).count();
    assert_eq!(days, 31);
}

#[test]
fn test_month_grid_rejects_invalid_month() {
    assert_eq!(
        month_grid(2026, 13),
        Err(DomainError::InvalidCalendarMonth {
            year: 2026,
            month: 13
        })
    );
}

#[test]
fn test_locale_parsing() {
    assert_eq!("ru-RU".parse::<Locale>(), Ok(Locale::Ru));
    assert_eq!("uz".parse::<Locale>(), Ok(Locale::Uz));
    assert!(matches!(
        "de".parse::<Locale>(),
        Err(DomainError::UnsupportedLocale(_))
    ));
}
