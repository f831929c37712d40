// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lifecycle and connectivity driven refetching.
//!
//! The monitor remembers the last reported app state and connectivity and
//! triggers a resync on the two transitions that matter: returning to the
//! foreground and regaining a connection.

use crate::client::QueryClient;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Application lifecycle state as reported by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppState {
    /// Visible and interactive.
    #[default]
    Active,
    /// Visible but not interactive.
    Inactive,
    /// Not visible.
    Background,
}

/// Network reachability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connectivity {
    /// Reachable.
    #[default]
    Online,
    /// Unreachable.
    Offline,
}

/// Why a resync ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResyncTrigger {
    /// The app returned to the foreground.
    Foreground,
    /// Connectivity was regained.
    Reconnect,
}

/// Outcome of one resync pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResyncReport {
    /// Keys refetched successfully.
    pub refetched: usize,
    /// Keys whose refetch failed or was discarded.
    pub failed: usize,
}

/// Tracks lifecycle and connectivity transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResyncMonitor {
    app_state: AppState,
    connectivity: Connectivity,
}

impl ResyncMonitor {
    /// Creates a monitor for an app that starts active and online.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            app_state: AppState::Active,
            connectivity: Connectivity::Online,
        }
    }

    /// Returns the last reported app state.
    #[must_use]
    pub const fn app_state(&self) -> AppState {
        self.app_state
    }

    /// Returns the last reported connectivity.
    #[must_use]
    pub const fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Records a new app state. Returns the trigger if the app just
    /// returned to the foreground.
    pub fn app_state_changed(&mut self, next: AppState) -> Option<ResyncTrigger> {
        let previous: AppState = std::mem::replace(&mut self.app_state, next);
        (previous != AppState::Active && next == AppState::Active)
            .then_some(ResyncTrigger::Foreground)
    }

    /// Records new connectivity. Returns the trigger if the connection was
    /// just regained.
    pub fn connectivity_changed(&mut self, next: Connectivity) -> Option<ResyncTrigger> {
        let previous: Connectivity = std::mem::replace(&mut self.connectivity, next);
        (previous == Connectivity::Offline && next == Connectivity::Online)
            .then_some(ResyncTrigger::Reconnect)
    }

    /// Records a new app state and resyncs `client` on a foreground
    /// transition, unless disabled by configuration.
    pub async fn on_app_state(
        &mut self,
        client: &QueryClient,
        next: AppState,
    ) -> Option<ResyncReport> {
        let trigger: ResyncTrigger = self.app_state_changed(next)?;
        if !client.config().refetch_on_foreground {
            info!("Foreground resync disabled");
            return None;
        }
        Some(client.resync(trigger).await)
    }

    /// Records new connectivity and resyncs `client` on reconnect, unless
    /// disabled by configuration.
    pub async fn on_connectivity(
        &mut self,
        client: &QueryClient,
        next: Connectivity,
    ) -> Option<ResyncReport> {
        let trigger: ResyncTrigger = self.connectivity_changed(next)?;
        if !client.config().refetch_on_reconnect {
            info!("Reconnect resync disabled");
            return None;
        }
        Some(client.resync(trigger).await)
    }
}
