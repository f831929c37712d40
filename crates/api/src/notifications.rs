// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The single place surfaced errors become user-facing messages.
//!
//! Client errors carry the server's message verbatim. Network failures,
//! server failures and session expiry use fixed localized messages.
//! Session expiry tears the session down before the message is produced.

use crate::error::ApiError;
use bookit_domain::{BlockReason, Locale};
use bookit_persistence::PreferencesStore;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    /// Informational.
    Info,
    /// The action did not happen but the user can fix it.
    Warning,
    /// The action failed.
    Error,
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Severity.
    pub level: NotificationLevel,
    /// Localized text.
    pub message: String,
}

impl Notification {
    fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

const fn network_message(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "No connection. Check your internet and try again.",
        Locale::Ru => "Нет соединения. Проверьте интернет и попробуйте снова.",
        Locale::Uz => "Internet aloqasi yo'q. Ulanishni tekshirib, qayta urinib ko'ring.",
    }
}

const fn session_expired_message(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Your session has expired. Please sign in again.",
        Locale::Ru => "Сессия истекла. Пожалуйста, войдите снова.",
        Locale::Uz => "Sessiya muddati tugadi. Iltimos, qayta kiring.",
    }
}

const fn server_message(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Something went wrong. Please try again later.",
        Locale::Ru => "Что-то пошло не так. Попробуйте позже.",
        Locale::Uz => "Nimadir xato ketdi. Keyinroq qayta urinib ko'ring.",
    }
}

const fn blocked_message(reason: BlockReason, locale: Locale) -> &'static str {
    match (reason, locale) {
        (BlockReason::NeedCode, Locale::En) => "Enter an invitation code to join as a worker.",
        (BlockReason::NeedCode, Locale::Ru) => {
            "Введите код приглашения, чтобы стать сотрудником."
        }
        (BlockReason::NeedCode, Locale::Uz) => "Xodim bo'lish uchun taklif kodini kiriting.",
        (BlockReason::NeedBrand, Locale::En) => "Create a business first.",
        (BlockReason::NeedBrand, Locale::Ru) => "Сначала создайте бизнес.",
        (BlockReason::NeedBrand, Locale::Uz) => "Avval biznes yarating.",
        (BlockReason::NotAllowed, Locale::En) => "This role switch is not allowed.",
        (BlockReason::NotAllowed, Locale::Ru) => "Такая смена роли недоступна.",
        (BlockReason::NotAllowed, Locale::Uz) => "Bu rolni almashtirish mumkin emas.",
    }
}

/// Maps an error to a notification in `locale`, without side effects.
///
/// Returns `None` for discarded responses, which nobody is waiting for.
#[must_use]
pub fn notification_for(error: &ApiError, locale: Locale) -> Option<Notification> {
    let notification: Notification = match error {
        ApiError::Discarded { .. } => return None,
        ApiError::Network { .. } => {
            Notification::new(NotificationLevel::Error, network_message(locale))
        }
        ApiError::SessionExpired { .. } => {
            Notification::new(NotificationLevel::Warning, session_expired_message(locale))
        }
        ApiError::Client { message, .. } => {
            Notification::new(NotificationLevel::Error, message.clone())
        }
        ApiError::Validation(errors) => Notification::new(
            NotificationLevel::Warning,
            errors
                .first()
                .map_or_else(|| server_message(locale), |e| e.message(locale)),
        ),
        ApiError::RoleSwitchBlocked { reason, .. } => {
            Notification::new(NotificationLevel::Warning, blocked_message(*reason, locale))
        }
        ApiError::Server { .. }
        | ApiError::DomainRuleViolation { .. }
        | ApiError::UnexpectedResponse { .. }
        | ApiError::Storage { .. }
        | ApiError::Internal { .. } => {
            Notification::new(NotificationLevel::Error, server_message(locale))
        }
    };
    Some(notification)
}

/// Global handler for surfaced errors.
#[derive(Clone)]
pub struct ErrorHandler {
    preferences: Arc<PreferencesStore>,
    teardown: Arc<dyn Fn() + Send + Sync>,
}

impl std::fmt::Debug for ErrorHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorHandler")
            .field("preferences", &self.preferences)
            .finish_non_exhaustive()
    }
}

impl ErrorHandler {
    /// Creates a handler that localizes with `preferences` and calls
    /// `teardown` on session expiry.
    #[must_use]
    pub fn new(preferences: Arc<PreferencesStore>, teardown: Arc<dyn Fn() + Send + Sync>) -> Self {
        Self {
            preferences,
            teardown,
        }
    }

    /// Handles one surfaced error.
    #[must_use]
    pub fn handle(&self, error: &ApiError) -> Option<Notification> {
        if error.is_session_expired() {
            info!("Session expired, tearing down");
            (self.teardown)();
        } else {
            warn!(%error, "Surfacing error to user");
        }
        notification_for(error, self.preferences.language())
    }
}
