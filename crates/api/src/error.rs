// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use bookit::{CoreError, ErrorKind, RequestError};
use bookit_domain::{BlockReason, DomainError, UserRole, ValidationError};
use bookit_persistence::PersistenceError;

/// API-level errors.
///
/// Everything that reaches the global handler is one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No response was received.
    Network {
        /// Transport message.
        message: String,
    },
    /// The session is gone and the user must sign in again.
    SessionExpired {
        /// Server message.
        message: String,
    },
    /// The server rejected the request.
    Client {
        /// HTTP status.
        status: u16,
        /// Backend error code.
        code: Option<String>,
        /// Server message, shown verbatim.
        message: String,
    },
    /// The server failed after every retry.
    Server {
        /// HTTP status.
        status: u16,
        /// Server message.
        message: String,
    },
    /// The input failed local validation; nothing was sent.
    Validation(Vec<ValidationError>),
    /// The role switch is not allowed; nothing was sent.
    RoleSwitchBlocked {
        /// Current role.
        from: UserRole,
        /// Requested role.
        to: UserRole,
        /// Why it was rejected.
        reason: BlockReason,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// A human-readable description of the violation.
        message: String,
    },
    /// The response did not have the expected shape.
    UnexpectedResponse {
        /// The request or key involved.
        context: String,
        /// The decoder message.
        message: String,
    },
    /// The response arrived after its observer detached.
    Discarded {
        /// The key whose response was dropped.
        key: String,
    },
    /// Persisted client state could not be read or written.
    Storage {
        /// The storage error.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network { message } => write!(f, "Network error: {message}"),
            Self::SessionExpired { message } => write!(f, "Session expired: {message}"),
            Self::Client {
                status, message, ..
            } => write!(f, "Request rejected ({status}): {message}"),
            Self::Server { status, message } => write!(f, "Server error ({status}): {message}"),
            Self::Validation(errors) => {
                write!(f, "Invalid input:")?;
                for error in errors {
                    write!(f, " {error};")?;
                }
                Ok(())
            }
            Self::RoleSwitchBlocked { from, to, reason } => {
                write!(f, "Cannot switch role from {from} to {to}: {reason}")
            }
            Self::DomainRuleViolation { message } => {
                write!(f, "Domain rule violation: {message}")
            }
            Self::UnexpectedResponse { context, message } => {
                write!(f, "Unexpected response for {context}: {message}")
            }
            Self::Discarded { key } => write!(f, "Response for {key} discarded"),
            Self::Storage { message } => write!(f, "Storage error: {message}"),
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Returns whether this error ends the session.
    #[must_use]
    pub const fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired { .. })
    }

    /// Returns the HTTP status, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Client { status, .. } | Self::Server { status, .. } => Some(*status),
            Self::SessionExpired { .. } => Some(401),
            _ => None,
        }
    }
}

/// Translates a request error by its classification.
#[must_use]
pub fn translate_request_error(err: RequestError) -> ApiError {
    match err.classify() {
        ErrorKind::Network => ApiError::Network {
            message: err.message,
        },
        ErrorKind::SessionExpired => ApiError::SessionExpired {
            message: err.message,
        },
        ErrorKind::Client(status) => ApiError::Client {
            status,
            code: err.code,
            message: err.message,
        },
        ErrorKind::Server(status) => ApiError::Server {
            status,
            message: err.message,
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::Request(request) => translate_request_error(request),
        CoreError::Decode { key, message } => ApiError::UnexpectedResponse {
            context: key,
            message,
        },
        CoreError::Discarded { key } => ApiError::Discarded { key },
        CoreError::Config(message) => ApiError::Internal {
            message: format!("Invalid configuration: {message}"),
        },
    }
}

/// Translates a domain error into an API error.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::RoleSwitchBlocked { from, to, reason } => {
            ApiError::RoleSwitchBlocked { from, to, reason }
        }
        other => ApiError::DomainRuleViolation {
            message: other.to_string(),
        },
    }
}

impl From<RequestError> for ApiError {
    fn from(err: RequestError) -> Self {
        translate_request_error(err)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        translate_core_error(err)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        Self::Storage {
            message: err.to_string(),
        }
    }
}

impl From<Vec<ValidationError>> for ApiError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}
