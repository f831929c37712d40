// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Declarative form validation.
//!
//! Validators collect every failing field instead of stopping at the first
//! one, so a form can highlight all problems at once. Error codes are
//! locale-independent; [`validation_message`] turns a code into text.

use crate::forms::{
    BrandForm, ExperienceForm, LoginForm, ProfileForm, RegisterForm, ReservationForm, ReviewForm,
    ServiceForm, VerifyCodeForm, WorkerForm,
};
use crate::locale::Locale;
use crate::schedule::{ScheduleEntity, parse_hhmm, validate_schedule};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Locale-independent reason a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationCode {
    /// The field is empty.
    Required,
    /// The value is shorter than allowed.
    TooShort,
    /// The value is longer than allowed.
    TooLong,
    /// Not an international phone number.
    InvalidPhone,
    /// Not a one-time code.
    InvalidCode,
    /// Not a `HH:MM` time, or a range that ends before it starts.
    InvalidTime,
    /// Not a `YYYY-MM-DD` date.
    InvalidDate,
    /// Rating outside 1..=5.
    InvalidRating,
    /// Zero where a positive value is required.
    MustBePositive,
    /// End year before start year.
    InvalidYearRange,
    /// Schedule structure is inconsistent.
    InvalidSchedule,
}

/// A single failing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// The form field name.
    pub field: &'static str,
    /// Why it failed.
    pub code: ValidationCode,
}

impl ValidationError {
    /// Creates a new validation error.
    #[must_use]
    pub const fn new(field: &'static str, code: ValidationCode) -> Self {
        Self { field, code }
    }

    /// Returns the localized message for this error.
    #[must_use]
    pub const fn message(&self, locale: Locale) -> &'static str {
        validation_message(self.code, locale)
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message(Locale::En))
    }
}

impl std::error::Error for ValidationError {}

/// Something that can be checked before submission.
pub trait Validate {
    /// Validates every field.
    ///
    /// # Errors
    ///
    /// Returns all failing fields.
    fn validate(&self) -> Result<(), Vec<ValidationError>>;
}

/// Returns the message shown for `code` in `locale`.
#[must_use]
pub const fn validation_message(code: ValidationCode, locale: Locale) -> &'static str {
    match (code, locale) {
        (ValidationCode::Required, Locale::En) => "This field is required",
        (ValidationCode::Required, Locale::Ru) => "Обязательное поле",
        (ValidationCode::Required, Locale::Uz) => "Ushbu maydon majburiy",
        (ValidationCode::TooShort, Locale::En) => "Value is too short",
        (ValidationCode::TooShort, Locale::Ru) => "Слишком короткое значение",
        (ValidationCode::TooShort, Locale::Uz) => "Qiymat juda qisqa",
        (ValidationCode::TooLong, Locale::En) => "Value is too long",
        (ValidationCode::TooLong, Locale::Ru) => "Слишком длинное значение",
        (ValidationCode::TooLong, Locale::Uz) => "Qiymat juda uzun",
        (ValidationCode::InvalidPhone, Locale::En) => "Enter a valid phone number",
        (ValidationCode::InvalidPhone, Locale::Ru) => "Введите корректный номер телефона",
        (ValidationCode::InvalidPhone, Locale::Uz) => "To'g'ri telefon raqamini kiriting",
        (ValidationCode::InvalidCode, Locale::En) => "Enter the code from the SMS",
        (ValidationCode::InvalidCode, Locale::Ru) => "Введите код из СМС",
        (ValidationCode::InvalidCode, Locale::Uz) => "SMS dagi kodni kiriting",
        (ValidationCode::InvalidTime, Locale::En) => "Enter a valid time",
        (ValidationCode::InvalidTime, Locale::Ru) => "Введите корректное время",
        (ValidationCode::InvalidTime, Locale::Uz) => "To'g'ri vaqtni kiriting",
        (ValidationCode::InvalidDate, Locale::En) => "Enter a valid date",
        (ValidationCode::InvalidDate, Locale::Ru) => "Введите корректную дату",
        (ValidationCode::InvalidDate, Locale::Uz) => "To'g'ri sanani kiriting",
        (ValidationCode::InvalidRating, Locale::En) => "Choose a rating from 1 to 5",
        (ValidationCode::InvalidRating, Locale::Ru) => "Выберите оценку от 1 до 5",
        (ValidationCode::InvalidRating, Locale::Uz) => "1 dan 5 gacha baho tanlang",
        (ValidationCode::MustBePositive, Locale::En) => "Value must be greater than zero",
        (ValidationCode::MustBePositive, Locale::Ru) => "Значение должно быть больше нуля",
        (ValidationCode::MustBePositive, Locale::Uz) => "Qiymat noldan katta bo'lishi kerak",
        (ValidationCode::InvalidYearRange, Locale::En) => "End year cannot be before start year",
        (ValidationCode::InvalidYearRange, Locale::Ru) => {
            "Год окончания не может быть раньше года начала"
        }
        (ValidationCode::InvalidYearRange, Locale::Uz) => {
            "Tugash yili boshlanish yilidan oldin bo'lishi mumkin emas"
        }
        (ValidationCode::InvalidSchedule, Locale::En) => "Check the working hours",
        (ValidationCode::InvalidSchedule, Locale::Ru) => "Проверьте часы работы",
        (ValidationCode::InvalidSchedule, Locale::Uz) => "Ish vaqtini tekshiring",
    }
}

/// Validates an international phone number (`+` followed by 9 to 15 digits).
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    let Some(digits) = phone.trim().strip_prefix('+') else {
        return false;
    };
    (9..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

/// Accumulates failing fields.
#[derive(Debug, Default)]
struct Collector {
    errors: Vec<ValidationError>,
}

impl Collector {
    fn check(&mut self, ok: bool, field: &'static str, code: ValidationCode) {
        if !ok {
            self.errors.push(ValidationError::new(field, code));
        }
    }

    fn text(&mut self, value: &str, field: &'static str, min: usize, max: usize) {
        let len: usize = value.trim().chars().count();
        if len == 0 {
            self.errors
                .push(ValidationError::new(field, ValidationCode::Required));
        } else if len < min {
            self.errors
                .push(ValidationError::new(field, ValidationCode::TooShort));
        } else if len > max {
            self.errors
                .push(ValidationError::new(field, ValidationCode::TooLong));
        }
    }

    fn phone(&mut self, phone: &str) {
        if phone.trim().is_empty() {
            self.errors
                .push(ValidationError::new("phone", ValidationCode::Required));
        } else {
            self.check(is_valid_phone(phone), "phone", ValidationCode::InvalidPhone);
        }
    }

    fn finish(self) -> Result<(), Vec<ValidationError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

impl Validate for LoginForm {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut c = Collector::default();
        c.phone(&self.phone);
        c.finish()
    }
}

impl Validate for VerifyCodeForm {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut c = Collector::default();
        c.phone(&self.phone);
        let code: &str = self.code.trim();
        c.check(
            (4..=6).contains(&code.len()) && code.chars().all(|ch| ch.is_ascii_digit()),
            "code",
            ValidationCode::InvalidCode,
        );
        c.finish()
    }
}

impl Validate for RegisterForm {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut c = Collector::default();
        c.phone(&self.phone);
        c.text(&self.full_name, "fullName", 2, 64);
        c.finish()
    }
}

impl Validate for ProfileForm {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut c = Collector::default();
        c.text(&self.full_name, "fullName", 2, 64);
        c.finish()
    }
}

impl Validate for BrandForm {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut c = Collector::default();
        c.text(&self.name, "name", 2, 80);
        c.text(&self.category, "category", 1, 40);
        if let Some(description) = &self.description {
            c.check(
                description.chars().count() <= 1000,
                "description",
                ValidationCode::TooLong,
            );
        }
        c.finish()
    }
}

impl Validate for ServiceForm {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut c = Collector::default();
        c.check(
            !self.brand_id.trim().is_empty(),
            "brandId",
            ValidationCode::Required,
        );
        c.text(&self.name, "name", 2, 80);
        c.check(self.price > 0, "price", ValidationCode::MustBePositive);
        c.check(
            self.duration_minutes > 0,
            "durationMinutes",
            ValidationCode::MustBePositive,
        );
        c.finish()
    }
}

impl Validate for WorkerForm {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut c = Collector::default();
        c.text(&self.full_name, "fullName", 2, 64);
        c.finish()
    }
}

impl Validate for ExperienceForm {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut c = Collector::default();
        c.text(&self.company, "company", 1, 80);
        c.text(&self.position, "position", 1, 80);
        if let Some(to_year) = self.to_year {
            c.check(
                to_year >= self.from_year,
                "toYear",
                ValidationCode::InvalidYearRange,
            );
        }
        c.finish()
    }
}

impl Validate for ReviewForm {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut c = Collector::default();
        c.check(
            (1..=5).contains(&self.rating),
            "rating",
            ValidationCode::InvalidRating,
        );
        if let Some(comment) = &self.comment {
            c.check(
                comment.chars().count() <= 500,
                "comment",
                ValidationCode::TooLong,
            );
        }
        c.finish()
    }
}

impl Validate for ReservationForm {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut c = Collector::default();
        c.check(
            !self.brand_id.trim().is_empty(),
            "brandId",
            ValidationCode::Required,
        );
        c.check(
            !self.service_id.trim().is_empty(),
            "serviceId",
            ValidationCode::Required,
        );
        c.check(
            NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").is_ok(),
            "date",
            ValidationCode::InvalidDate,
        );
        c.check(
            parse_hhmm(&self.start_time).is_ok(),
            "startTime",
            ValidationCode::InvalidTime,
        );
        c.finish()
    }
}

impl Validate for ScheduleEntity {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        validate_schedule(self)
            .map_err(|_| vec![ValidationError::new("workingDays", ValidationCode::InvalidSchedule)])
    }
}
