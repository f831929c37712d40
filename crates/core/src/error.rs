// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes the backend attaches to a 401 when the session is gone.
pub const SESSION_EXPIRED_CODES: [&str; 2] = ["SESSION_EXPIRED", "TOKEN_EXPIRED"];

/// Typed failure of the HTTP collaborator.
///
/// `status == 0` means no response was received.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message} (status {status})")]
pub struct RequestError {
    /// Human-readable message, shown verbatim for client errors.
    pub message: String,
    /// Machine-readable code supplied by the backend.
    #[serde(default)]
    pub code: Option<String>,
    /// HTTP status, `0` for network failures.
    #[serde(default)]
    pub status: u16,
}

/// Classification of a [`RequestError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No response; connectivity failure.
    Network,
    /// 4xx, and any other non-5xx status.
    Client(u16),
    /// 5xx.
    Server(u16),
    /// 401 carrying one of [`SESSION_EXPIRED_CODES`].
    SessionExpired,
}

impl RequestError {
    /// Creates an error for a received response.
    #[must_use]
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            status,
        }
    }

    /// Creates an error for a request that never got a response.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(0, message)
    }

    /// Attaches a backend error code.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Classifies this error.
    #[must_use]
    pub fn classify(&self) -> ErrorKind {
        match self.status {
            0 => ErrorKind::Network,
            401 if self
                .code
                .as_deref()
                .is_some_and(|code| SESSION_EXPIRED_CODES.contains(&code)) =>
            {
                ErrorKind::SessionExpired
            }
            500..=599 => ErrorKind::Server(self.status),
            status => ErrorKind::Client(status),
        }
    }

    /// Returns whether this is a 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// Errors raised by the cache coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The request failed after retries were exhausted.
    Request(RequestError),
    /// The response did not match the expected shape.
    Decode {
        /// The key being fetched, or the mutation being settled.
        key: String,
        /// The deserializer message.
        message: String,
    },
    /// The observer that requested the data detached before it arrived.
    Discarded {
        /// The key whose response was dropped.
        key: String,
    },
    /// Configuration could not be loaded.
    Config(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Request(err) => write!(f, "Request failed: {err}"),
            Self::Decode { key, message } => {
                write!(f, "Unexpected response for {key}: {message}")
            }
            Self::Discarded { key } => {
                write!(f, "Response for {key} discarded: observer detached")
            }
            Self::Config(msg) => write!(f, "Invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<RequestError> for CoreError {
    fn from(err: RequestError) -> Self {
        Self::Request(err)
    }
}
