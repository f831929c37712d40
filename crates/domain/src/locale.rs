// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English. Also the canonical table for locale-invariant labels.
    #[default]
    En,
    /// Russian.
    Ru,
    /// Uzbek (Latin script).
    Uz,
}

impl Locale {
    /// Every supported locale, canonical English first.
    pub const ALL: [Self; 3] = [Self::En, Self::Ru, Self::Uz];

    /// Returns the locale tag (`en`, `ru`, `uz`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
            Self::Uz => "uz",
        }
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept region-qualified tags such as `ru-RU` or `uz_UZ`.
        let primary: &str = s
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim();
        match primary.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ru" => Ok(Self::Ru),
            "uz" => Ok(Self::Uz),
            _ => Err(DomainError::UnsupportedLocale(s.to_string())),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
