// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Hierarchical cache keys.
//!
//! Every key starts with its [`Entity`], so keys of different entities can
//! never collide even when the remaining segments are identical. Keys are
//! compared structurally: a parameter object compares equal to another
//! object with the same fields regardless of field order, and `null`
//! fields are dropped so an absent optional parameter and an explicit
//! `None` produce the same key.
//!
//! Invalidating a key invalidates every key that extends it, so
//! `["schedule"]` covers `["schedule", "detail", {"brandId": "B1"}]`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::hash::{Hash, Hasher};

/// A domain resource with its own cache namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Entity {
    /// Sign-in and session.
    Auth,
    /// The signed-in account.
    User,
    /// Businesses.
    Brand,
    /// Staff members.
    Worker,
    /// Bookable services.
    Service,
    /// Working schedules and days off.
    Schedule,
    /// Appointments.
    Reservation,
    /// Search results.
    Search,
    /// Uploaded files.
    Files,
    /// Worker work history.
    Experience,
    /// Worker reviews.
    Review,
}

impl Entity {
    /// Every entity.
    pub const ALL: [Self; 11] = [
        Self::Auth,
        Self::User,
        Self::Brand,
        Self::Worker,
        Self::Service,
        Self::Schedule,
        Self::Reservation,
        Self::Search,
        Self::Files,
        Self::Experience,
        Self::Review,
    ];

    /// Returns the key prefix of this entity.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::User => "user",
            Self::Brand => "brand",
            Self::Worker => "worker",
            Self::Service => "service",
            Self::Schedule => "schedule",
            Self::Reservation => "reservation",
            Self::Search => "search",
            Self::Files => "files",
            Self::Experience => "experience",
            Self::Review => "review",
        }
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One segment of a [`QueryKey`] after the entity prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySegment {
    /// A fixed scope name such as `"list"` or `"detail"`.
    Text(String),
    /// A parameter object. Field order is irrelevant to equality.
    Params(Map<String, Value>),
}

impl KeySegment {
    /// Builds a parameter segment from any JSON value.
    ///
    /// Objects become [`KeySegment::Params`] with `null` fields removed at
    /// every depth; strings become [`KeySegment::Text`]; any other value is
    /// kept as its JSON text.
    #[must_use]
    pub fn params(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Params(strip_nulls(map)),
            Value::String(text) => Self::Text(text),
            other => Self::Text(other.to_string()),
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Self::Text(text) => Value::String(text.clone()),
            Self::Params(map) => Value::Object(map.clone()),
        }
    }
}

impl From<&str> for KeySegment {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for KeySegment {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Value> for KeySegment {
    fn from(value: Value) -> Self {
        Self::params(value)
    }
}

fn strip_nulls(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| match v {
            Value::Object(inner) => (k, Value::Object(strip_nulls(inner))),
            other => (k, other),
        })
        .collect()
}

fn hash_value<H: Hasher>(value: &Value, state: &mut H) {
    match value {
        Value::Null => 0u8.hash(state),
        Value::Bool(b) => {
            1u8.hash(state);
            b.hash(state);
        }
        Value::Number(n) => {
            2u8.hash(state);
            n.to_string().hash(state);
        }
        Value::String(s) => {
            3u8.hash(state);
            s.hash(state);
        }
        Value::Array(items) => {
            4u8.hash(state);
            items.len().hash(state);
            for item in items {
                hash_value(item, state);
            }
        }
        Value::Object(map) => {
            5u8.hash(state);
            hash_map(map, state);
        }
    }
}

fn hash_map<H: Hasher>(map: &Map<String, Value>, state: &mut H) {
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries.len().hash(state);
    for (k, v) in entries {
        k.hash(state);
        hash_value(v, state);
    }
}

impl Hash for KeySegment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Text(text) => {
                0u8.hash(state);
                text.hash(state);
            }
            Self::Params(map) => {
                1u8.hash(state);
                hash_map(map, state);
            }
        }
    }
}

/// Structural identifier of a cached server result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    entity: Entity,
    segments: Vec<KeySegment>,
}

impl QueryKey {
    /// Scope segment for collection results.
    pub const LIST: &'static str = "list";
    /// Scope segment for single-resource results.
    pub const DETAIL: &'static str = "detail";

    /// Returns the root key of an entity. Invalidating it covers every key
    /// of that entity.
    #[must_use]
    pub const fn all(entity: Entity) -> Self {
        Self {
            entity,
            segments: Vec::new(),
        }
    }

    /// Returns `[entity, "list"]`.
    #[must_use]
    pub fn lists(entity: Entity) -> Self {
        Self::all(entity).push(Self::LIST)
    }

    /// Returns `[entity, "list", params]`.
    #[must_use]
    pub fn list(entity: Entity, params: Value) -> Self {
        Self::lists(entity).push(KeySegment::params(params))
    }

    /// Returns `[entity, "detail"]`.
    #[must_use]
    pub fn details(entity: Entity) -> Self {
        Self::all(entity).push(Self::DETAIL)
    }

    /// Returns `[entity, "detail", params]`.
    #[must_use]
    pub fn detail(entity: Entity, params: Value) -> Self {
        Self::details(entity).push(KeySegment::params(params))
    }

    /// Returns `[entity, scope, params]`.
    #[must_use]
    pub fn scoped(entity: Entity, scope: &str, params: Value) -> Self {
        Self::all(entity)
            .push(scope)
            .push(KeySegment::params(params))
    }

    /// Appends a segment.
    #[must_use]
    pub fn push(mut self, segment: impl Into<KeySegment>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Returns the entity this key belongs to.
    #[must_use]
    pub const fn entity(&self) -> Entity {
        self.entity
    }

    /// Returns the segments after the entity prefix.
    #[must_use]
    pub fn segments(&self) -> &[KeySegment] {
        &self.segments
    }

    /// Returns whether `prefix` is this key or one of its ancestors.
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        self.entity == prefix.entity && self.segments.starts_with(&prefix.segments)
    }

    /// Returns the key as a JSON array, entity first.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut items: Vec<Value> = Vec::with_capacity(self.segments.len() + 1);
        items.push(Value::String(self.entity.as_str().to_string()));
        items.extend(self.segments.iter().map(KeySegment::to_value));
        Value::Array(items)
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_value())
    }
}

/// Builds a key from an entity and trailing segments.
#[must_use]
pub fn key_for<I, S>(entity: Entity, segments: I) -> QueryKey
where
    I: IntoIterator<Item = S>,
    S: Into<KeySegment>,
{
    segments
        .into_iter()
        .fold(QueryKey::all(entity), |key, segment| key.push(segment))
}
