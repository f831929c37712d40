// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, Page, Reservation, ReservationStatus, Theme, UserProfile, UserRole};
use std::str::FromStr;

#[test]
fn test_reservation_status_parsing() {
    assert_eq!(
        ReservationStatus::from_str("confirmed"),
        Ok(ReservationStatus::Confirmed)
    );
    assert!(matches!(
        ReservationStatus::from_str("LOST"),
        Err(DomainError::InvalidReservationStatus(_))
    ));
}

#[test]
fn test_only_open_reservations_are_cancellable() {
    assert!(ReservationStatus::Pending.is_cancellable());
    assert!(ReservationStatus::Confirmed.is_cancellable());
    assert!(!ReservationStatus::Cancelled.is_cancellable());
    assert!(!ReservationStatus::Completed.is_cancellable());
}

#[test]
fn test_reservation_status_defaults_when_absent() {
    let json: &str = r#"{
        "id": "r1", "userId": "u1", "brandId": "B1", "serviceId": "S1",
        "date": "2026-03-02", "startTime": "10:00"
    }"#;
    let reservation: Reservation = serde_json::from_str(json).unwrap();
    assert_eq!(reservation.status, ReservationStatus::Pending);
    assert!(reservation.worker_id.is_none());
}

#[test]
fn test_profile_deserializes_role() {
    let json: &str = r#"{"id": "u1", "phone": "+998901234567", "role": "CREATOR", "hasBrand": true}"#;
    let profile: UserProfile = serde_json::from_str(json).unwrap();
    assert_eq!(profile.role, UserRole::Creator);
    assert!(profile.has_brand);
}

#[test]
fn test_page_has_more() {
    let page: Page<u32> = serde_json::from_str(r#"{"items": [1, 2], "nextCursor": "c2"}"#).unwrap();
    assert!(page.has_more());
    let last: Page<u32> = serde_json::from_str(r#"{"items": []}"#).unwrap();
    assert!(!last.has_more());
}

#[test]
fn test_theme_round_trip_through_str() {
    for theme in [Theme::Light, Theme::Dark, Theme::System] {
        assert_eq!(Theme::from_str(theme.as_str()), Ok(theme));
    }
    assert_eq!(Theme::default(), Theme::System);
}
