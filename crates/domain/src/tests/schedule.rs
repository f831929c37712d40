// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Break, DomainError, ScheduleEntity, SpecialDayOff, WorkingDay, parse_hhmm, validate_schedule,
};
use chrono::NaiveDate;

fn working_day(day_of_week: u8) -> WorkingDay {
    WorkingDay {
        day_of_week,
        start_time: String::from("09:00"),
        end_time: String::from("18:00"),
        breaks: vec![Break {
            start_time: String::from("13:00"),
            end_time: String::from("14:00"),
        }],
    }
}

fn create_test_schedule() -> ScheduleEntity {
    ScheduleEntity {
        id: String::from("sched-1"),
        owner_user_id: None,
        owner_brand_id: String::from("B1"),
        // Monday to Friday
        working_days: (1..=5).map(working_day).collect(),
        days_off: vec![SpecialDayOff {
            id: Some(String::from("off-1")),
            year: 2026,
            month: 3,
            day: 10,
            start_time: String::from("00:00"),
            end_time: String::from("23:59"),
        }],
    }
}

#[test]
fn test_working_day_lookup_uses_canonical_index() {
    let schedule: ScheduleEntity = create_test_schedule();
    let monday: NaiveDate = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    assert_eq!(schedule.working_day_for(monday).map(|d| d.day_of_week), Some(1));
    let sunday: NaiveDate = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    assert!(schedule.working_day_for(sunday).is_none());
}

#[test]
fn test_weekend_and_special_days_are_off() {
    let schedule: ScheduleEntity = create_test_schedule();
    assert!(schedule.is_day_off(NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()));
    assert!(schedule.is_day_off(NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()));
    assert!(!schedule.is_day_off(NaiveDate::from_ymd_opt(2026, 3, 11).unwrap()));
}

#[test]
fn test_working_dates_in_month() {
    let schedule: ScheduleEntity = create_test_schedule();
    let dates: Vec<NaiveDate> = schedule.working_dates_in_month(2026, 3).unwrap();
    // March 2026 has 22 weekdays, one of which is a special day off
    assert_eq!(dates.len(), 21);
    assert!(!dates.contains(&NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()));
}

#[test]
fn test_validate_schedule_accepts_valid_schedule() {
    assert_eq!(validate_schedule(&create_test_schedule()), Ok(()));
}

#[test]
fn test_validate_schedule_rejects_bad_day_index() {
    let mut schedule: ScheduleEntity = create_test_schedule();
    schedule.working_days.push(working_day(7));
    assert_eq!(
        validate_schedule(&schedule),
        Err(DomainError::InvalidDayIndex(7))
    );
}

#[test]
fn test_validate_schedule_rejects_inverted_hours() {
    let mut schedule: ScheduleEntity = create_test_schedule();
    schedule.working_days[0].end_time = String::from("08:00");
    assert!(matches!(
        validate_schedule(&schedule),
        Err(DomainError::InvalidTimeRange { .. })
    ));
}

#[test]
fn test_validate_schedule_rejects_impossible_day_off() {
    let mut schedule: ScheduleEntity = create_test_schedule();
    schedule.days_off[0].month = 2;
    schedule.days_off[0].day = 30;
    assert!(matches!(
        validate_schedule(&schedule),
        Err(DomainError::InvalidCalendarMonth { .. })
    ));
}

#[test]
fn test_parse_hhmm() {
    assert!(parse_hhmm("09:30").is_ok());
    assert_eq!(
        parse_hhmm("9h30"),
        Err(DomainError::InvalidTime(String::from("9h30")))
    );
}

#[test]
fn test_schedule_deserializes_from_camel_case() {
    let json: &str = r#"{
        "id": "s1",
        "ownerBrandId": "B1",
        "workingDays": [{"dayOfWeek": 0, "startTime": "10:00", "endTime": "16:00"}]
    }"#;
    let schedule: ScheduleEntity = serde_json::from_str(json).unwrap();
    assert_eq!(schedule.working_days[0].day_of_week, 0);
    assert!(schedule.working_days[0].breaks.is_empty());
    assert!(schedule.days_off.is_empty());
    assert!(schedule.owner_user_id.is_none());
}
