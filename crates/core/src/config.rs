// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::keys::Entity;
use crate::retry::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Default staleness window: five minutes.
pub const DEFAULT_STALE_TIME_MS: u64 = 5 * 60 * 1_000;

/// Client-side caching and resync settings.
///
/// Every field has a default, so a partial JSON document is enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// How long fetched data counts as fresh, in milliseconds.
    pub stale_time_ms: u64,
    /// Per-entity staleness windows that replace `stale_time_ms`.
    pub stale_time_overrides: HashMap<Entity, u64>,
    /// Retry limits and backoff.
    pub retry: RetryPolicy,
    /// Refetch stale observed data when the app returns to the foreground.
    pub refetch_on_foreground: bool,
    /// Refetch stale observed data when connectivity returns.
    pub refetch_on_reconnect: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            stale_time_ms: DEFAULT_STALE_TIME_MS,
            stale_time_overrides: HashMap::new(),
            retry: RetryPolicy::default(),
            refetch_on_foreground: true,
            refetch_on_reconnect: true,
        }
    }
}

impl ClientConfig {
    /// Returns the staleness window for an entity.
    #[must_use]
    pub fn stale_time_for(&self, entity: Entity) -> Duration {
        Duration::from_millis(
            self.stale_time_overrides
                .get(&entity)
                .copied()
                .unwrap_or(self.stale_time_ms),
        )
    }

    /// Parses a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Config` if the document is not valid JSON or has
    /// fields of the wrong type.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json).map_err(|e| CoreError::Config(e.to_string()))
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Config` if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path: &Path = path.as_ref();
        let contents: String = std::fs::read_to_string(path)
            .map_err(|e| CoreError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&contents)
    }
}
