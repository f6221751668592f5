//! Entity identity.
//!
//! Every book and user receives an [`EntityId`] when it is constructed. The
//! identifier is stored on the entity itself and never recomputed, so it stays
//! stable however the entity's other fields change.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique, permanent entity identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(uuid::Uuid);

impl EntityId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<uuid::Uuid> for EntityId {
    fn from(id: uuid::Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Anything stored in a [`Collection`](crate::Collection).
pub trait Entity {
    /// The identifier assigned at construction.
    fn id(&self) -> EntityId;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<EntityId> = (0..1000).map(|_| EntityId::new()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn display_matches_uuid() {
        let id = EntityId::new();
        assert_eq!(id.to_string(), id.as_uuid().to_string());
    }

    #[test]
    fn serializes_as_plain_uuid() {
        let id = EntityId::from(uuid::Uuid::nil());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00000000-0000-0000-0000-000000000000\"");
    }
}
