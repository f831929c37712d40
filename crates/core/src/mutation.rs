// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write requests described as data.
//!
//! A mutation names the keys it makes stale up front. The client applies
//! those invalidations before the caller sees the result.

use crate::keys::{Entity, QueryKey};

/// The kind of write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Creates a resource.
    Create,
    /// Changes a resource.
    Update,
    /// Removes a resource.
    Delete,
}

impl Operation {
    /// Returns the operation name used in logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A write and the cache keys it affects.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationRequest<P> {
    entity: Entity,
    operation: Operation,
    payload: P,
    affected_keys: Vec<QueryKey>,
    replaces: Vec<QueryKey>,
}

impl<P> MutationRequest<P> {
    /// Creates a write on `entity`. It affects every key of `entity`
    /// until more keys are added with [`Self::invalidates`].
    #[must_use]
    pub fn new(entity: Entity, operation: Operation, payload: P) -> Self {
        Self {
            entity,
            operation,
            payload,
            affected_keys: vec![QueryKey::all(entity)],
            replaces: Vec::new(),
        }
    }

    /// Shorthand for [`Operation::Create`].
    #[must_use]
    pub fn create(entity: Entity, payload: P) -> Self {
        Self::new(entity, Operation::Create, payload)
    }

    /// Shorthand for [`Operation::Update`].
    #[must_use]
    pub fn update(entity: Entity, payload: P) -> Self {
        Self::new(entity, Operation::Update, payload)
    }

    /// Shorthand for [`Operation::Delete`].
    #[must_use]
    pub fn delete(entity: Entity, payload: P) -> Self {
        Self::new(entity, Operation::Delete, payload)
    }

    /// Adds a key (and every key under it) to invalidate on success.
    #[must_use]
    pub fn invalidates(mut self, key: QueryKey) -> Self {
        if !self.affected_keys.contains(&key) {
            self.affected_keys.push(key);
        }
        self
    }

    /// Adds the root key of each entity to invalidate on success.
    #[must_use]
    pub fn invalidates_entities(self, entities: &[Entity]) -> Self {
        entities
            .iter()
            .fold(self, |request, entity| request.invalidates(QueryKey::all(*entity)))
    }

    /// Writes the response under `key` on success, so the next read of
    /// `key` is served without a refetch.
    #[must_use]
    pub fn replaces(mut self, key: QueryKey) -> Self {
        self.replaces.push(key);
        self
    }

    /// Returns the entity written to.
    #[must_use]
    pub const fn entity(&self) -> Entity {
        self.entity
    }

    /// Returns the kind of write.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    /// Returns the request body.
    #[must_use]
    pub const fn payload(&self) -> &P {
        &self.payload
    }

    /// Returns the keys invalidated on success.
    #[must_use]
    pub fn affected_keys(&self) -> &[QueryKey] {
        &self.affected_keys
    }

    /// Returns the keys overwritten with the response on success.
    #[must_use]
    pub fn replaced_keys(&self) -> &[QueryKey] {
        &self.replaces
    }

    /// Returns `"<entity>.<operation>"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}.{}", self.entity, self.operation)
    }
}
