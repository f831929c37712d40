// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Account role transitions.
//!
//! An account holds exactly one active role at a time. Switching between
//! roles is gated by [`next_role_allowed`], a total function over every
//! `(from, to)` pair that classifies the switch instead of failing.
//!
//! ## Invariants
//!
//! - Stepping down to `User` from `Worker` or `Creator` is never blocked
//! - `User` → `Worker` always requires an invite code redeemed elsewhere
//! - Any switch into or between brand roles requires owning a brand
//! - The server's view of the role is authoritative; see [`RoleState::reconcile`]

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The role an account currently acts under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    /// Not signed in.
    #[default]
    Guest,
    /// Signed in customer.
    User,
    /// Staff member working under a brand.
    Worker,
    /// Brand owner.
    Creator,
}

impl UserRole {
    /// Every role, in declaration order.
    pub const ALL: [Self; 4] = [Self::Guest, Self::User, Self::Worker, Self::Creator];

    /// Converts this role to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Guest => "GUEST",
            Self::User => "USER",
            Self::Worker => "WORKER",
            Self::Creator => "CREATOR",
        }
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GUEST" => Ok(Self::Guest),
            "USER" => Ok(Self::User),
            "WORKER" => Ok(Self::Worker),
            "CREATOR" => Ok(Self::Creator),
            _ => Err(DomainError::InvalidUserRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a role switch was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockReason {
    /// An invite code must be redeemed first.
    NeedCode,
    /// The account must own a brand first.
    NeedBrand,
    /// The switch is not permitted in the current state.
    NotAllowed,
}

impl BlockReason {
    /// Converts this reason to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NeedCode => "NEED_CODE",
            Self::NeedBrand => "NEED_BRAND",
            Self::NotAllowed => "NOT_ALLOWED",
        }
    }
}

impl std::fmt::Display for BlockReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifies a role switch.
///
/// Returns `None` when the switch is permitted and `Some(reason)` when it
/// is blocked. Rules are evaluated in priority order:
///
/// 1. `from == to` is a no-op
/// 2. `Creator`/`Worker` → `User` is always permitted
/// 3. `User` → `Worker` needs an invite code
/// 4. `User` → `Creator` needs a brand
/// 5. `Worker` → `Creator` needs a brand, otherwise not allowed
/// 6. `Creator` → `Worker` needs a brand, otherwise not allowed
/// 7. Anything else is unrestricted
#[must_use]
pub fn next_role_allowed(from: UserRole, to: UserRole, has_brand: bool) -> Option<BlockReason> {
    if from == to {
        return None;
    }
    match (from, to) {
        (UserRole::Creator | UserRole::Worker, UserRole::User) => None,
        (UserRole::User, UserRole::Worker) => Some(BlockReason::NeedCode),
        (UserRole::User, UserRole::Creator) => {
            if has_brand {
                None
            } else {
                Some(BlockReason::NeedBrand)
            }
        }
        (UserRole::Worker, UserRole::Creator) | (UserRole::Creator, UserRole::Worker) => {
            if has_brand {
                None
            } else {
                Some(BlockReason::NotAllowed)
            }
        }
        _ => None,
    }
}

/// The locally held role of the signed-in account.
///
/// Mutated only through [`RoleState::switch_to`] and
/// [`RoleState::reconcile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RoleState {
    role: UserRole,
    has_brand: bool,
    // Recorded for display only; redeeming a code is handled by the backend.
    has_invite_code: bool,
}

impl RoleState {
    /// Creates a new role state.
    #[must_use]
    pub const fn new(role: UserRole, has_brand: bool, has_invite_code: bool) -> Self {
        Self {
            role,
            has_brand,
            has_invite_code,
        }
    }

    /// Returns the active role.
    #[must_use]
    pub const fn role(&self) -> UserRole {
        self.role
    }

    /// Returns whether the account owns a brand.
    #[must_use]
    pub const fn has_brand(&self) -> bool {
        self.has_brand
    }

    /// Returns whether an invite code has been redeemed.
    #[must_use]
    pub const fn has_invite_code(&self) -> bool {
        self.has_invite_code
    }

    /// Checks whether switching to `to` is permitted without changing state.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RoleSwitchBlocked` if the transition rules reject
    /// the switch.
    pub fn check_switch(&self, to: UserRole) -> Result<(), DomainError> {
        match next_role_allowed(self.role, to, self.has_brand) {
            None => Ok(()),
            Some(reason) => Err(DomainError::RoleSwitchBlocked {
                from: self.role,
                to,
                reason,
            }),
        }
    }

    /// Switches the active role to `to` if the transition rules permit it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RoleSwitchBlocked` if the switch is rejected.
    /// The state is unchanged on error.
    pub fn switch_to(&mut self, to: UserRole) -> Result<UserRole, DomainError> {
        self.check_switch(to)?;
        self.role = to;
        Ok(self.role)
    }

    /// Overwrites the local view with the server's authoritative values.
    ///
    /// Returns `true` if anything changed.
    pub fn reconcile(&mut self, role: UserRole, has_brand: bool) -> bool {
        let changed: bool = self.role != role || self.has_brand != has_brand;
        self.role = role;
        self.has_brand = has_brand;
        changed
    }

    /// Records that the account now owns (or no longer owns) a brand.
    pub const fn set_has_brand(&mut self, has_brand: bool) {
        self.has_brand = has_brand;
    }

    /// Records invite-code redemption.
    pub const fn set_has_invite_code(&mut self, has_invite_code: bool) {
        self.has_invite_code = has_invite_code;
    }

    /// Returns the state of a signed-out account.
    #[must_use]
    pub const fn guest() -> Self {
        Self::new(UserRole::Guest, false, false)
    }
}
