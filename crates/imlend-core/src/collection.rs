//! Ordered, identifier-keyed entity collections.
//!
//! The book catalog and user registry are both a [`Collection`]: entities are
//! kept in insertion order for display, and no two share an identifier.
//! Lookups are linear scans; collections are expected to stay small.

use crate::book::Book;
use crate::error::CatalogError;
use crate::identity::{Entity, EntityId};
use crate::user::User;

/// The authoritative collection of books.
pub type Catalog = Collection<Book>;

/// The authoritative collection of users.
pub type Registry = Collection<User>;

/// An insertion-ordered collection of uniquely identified entities.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T: Entity> Collection<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an entity. Fails without changing anything if an entity with
    /// the same identifier is already stored.
    pub fn add(&mut self, entity: T) -> Result<EntityId, CatalogError> {
        let id = entity.id();
        if self.contains_id(id) {
            tracing::debug!(%id, "rejected duplicate entity");
            return Err(CatalogError::Duplicate(id));
        }
        self.items.push(entity);
        tracing::info!(%id, "entity added");
        Ok(id)
    }

    /// Membership test by identifier.
    pub fn contains(&self, entity: &T) -> bool {
        self.contains_id(entity.id())
    }

    pub fn contains_id(&self, id: EntityId) -> bool {
        self.items.iter().any(|e| e.id() == id)
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.items.iter().find(|e| e.id() == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut T> {
        self.items.iter_mut().find(|e| e.id() == id)
    }

    /// Entity at a zero-based display position.
    pub fn nth(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// All entities matching `predicate`, in collection order.
    pub fn find_by<P>(&self, predicate: P) -> Vec<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.items.iter().filter(|e| predicate(e)).collect()
    }

    /// Remove a single entity by identifier.
    pub fn remove(&mut self, id: EntityId) -> Result<T, CatalogError> {
        let pos = self
            .items
            .iter()
            .position(|e| e.id() == id)
            .ok_or(CatalogError::NotFound(id))?;
        tracing::info!(%id, "entity removed");
        Ok(self.items.remove(pos))
    }

    /// Remove every entity matching `predicate`.
    ///
    /// Returns the number removed, or [`CatalogError::NoMatch`] carrying
    /// `description` when nothing matched.
    pub fn remove_by<P>(&mut self, description: &str, predicate: P) -> Result<usize, CatalogError>
    where
        P: Fn(&T) -> bool,
    {
        let before = self.items.len();
        self.items.retain(|e| !predicate(e));
        let removed = before - self.items.len();
        if removed == 0 {
            return Err(CatalogError::NoMatch(description.to_string()));
        }
        tracing::info!(removed, "entities removed by {}", description);
        Ok(removed)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Entity> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
