// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ExperienceForm, Locale, LoginForm, RegisterForm, ReservationForm, ReviewForm, ServiceForm,
    Validate, ValidationCode, ValidationError, VerifyCodeForm, is_valid_phone, validation_message,
};

fn codes(result: Result<(), Vec<ValidationError>>) -> Vec<(&'static str, ValidationCode)> {
    result
        .err()
        .unwrap_or_default()
        .into_iter()
        .map(|e| (e.field, e.code))
        .collect()
}

#[test]
fn test_phone_format() {
    assert!(is_valid_phone("+998901234567"));
    assert!(!is_valid_phone("998901234567"));
    assert!(!is_valid_phone("+99890-123"));
    assert!(!is_valid_phone("+1234"));
}

#[test]
fn test_login_form_requires_phone() {
    let form: LoginForm = LoginForm::default();
    assert_eq!(
        codes(form.validate()),
        vec![("phone", ValidationCode::Required)]
    );
}

#[test]
fn test_verify_code_form_checks_code() {
    let form: VerifyCodeForm = VerifyCodeForm {
        phone: String::from("+998901234567"),
        code: String::from("12a4"),
    };
    assert_eq!(
        codes(form.validate()),
        vec![("code", ValidationCode::InvalidCode)]
    );
}

#[test]
fn test_register_form_collects_every_failure() {
    let form: RegisterForm = RegisterForm {
        phone: String::from("12345"),
        full_name: String::from("A"),
    };
    assert_eq!(
        codes(form.validate()),
        vec![
            ("phone", ValidationCode::InvalidPhone),
            ("fullName", ValidationCode::TooShort),
        ]
    );
}

#[test]
fn test_service_form_requires_positive_price_and_duration() {
    let form: ServiceForm = ServiceForm {
        brand_id: String::from("B1"),
        name: String::from("Haircut"),
        price: 0,
        duration_minutes: 0,
        worker_ids: Vec::new(),
    };
    assert_eq!(
        codes(form.validate()),
        vec![
            ("price", ValidationCode::MustBePositive),
            ("durationMinutes", ValidationCode::MustBePositive),
        ]
    );
}

#[test]
fn test_experience_form_rejects_inverted_years() {
    let form: ExperienceForm = ExperienceForm {
        company: String::from("Salon"),
        position: String::from("Stylist"),
        from_year: 2024,
        to_year: Some(2020),
    };
    assert_eq!(
        codes(form.validate()),
        vec![("toYear", ValidationCode::InvalidYearRange)]
    );
}

#[test]
fn test_review_form_rating_bounds() {
    let mut form: ReviewForm = ReviewForm {
        rating: 6,
        comment: None,
    };
    assert_eq!(
        codes(form.validate()),
        vec![("rating", ValidationCode::InvalidRating)]
    );
    form.rating = 5;
    assert!(form.validate().is_ok());
}

#[test]
fn test_reservation_form_checks_date_and_time() {
    let form: ReservationForm = ReservationForm {
        brand_id: String::from("B1"),
        service_id: String::from("S1"),
        worker_id: None,
        date: String::from("2026-02-30"),
        start_time: String::from("25:00"),
    };
    assert_eq!(
        codes(form.validate()),
        vec![
            ("date", ValidationCode::InvalidDate),
            ("startTime", ValidationCode::InvalidTime),
        ]
    );
}

#[test]
fn test_messages_are_localized() {
    assert_eq!(
        validation_message(ValidationCode::Required, Locale::En),
        "This field is required"
    );
    assert_eq!(
        validation_message(ValidationCode::Required, Locale::Ru),
        "Обязательное поле"
    );
    let error: ValidationError = ValidationError::new("phone", ValidationCode::InvalidPhone);
    assert_eq!(error.message(Locale::Uz), "To'g'ri telefon raqamini kiriting");
    assert_eq!(error.to_string(), "phone: Enter a valid phone number");
}
