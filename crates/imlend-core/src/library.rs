//! The library aggregate.
//!
//! [`Library`] owns the catalog, registry, and ledger together and is handed
//! by `&mut` to whatever drives the interaction. It adds the operations that
//! touch more than one collection: copy-count changes and deletions that
//! must respect active loans.

use crate::book::Book;
use crate::collection::{Catalog, Registry};
use crate::error::{CatalogError, Result};
use crate::identity::{Entity, EntityId};
use crate::ledger::{resolve, EntityRef, LoanLedger, OutstandingLoan};
use crate::search::{BookQuery, UserQuery};
use crate::user::User;

#[derive(Debug, Clone, Default)]
pub struct Library {
    catalog: Catalog,
    registry: Registry,
    ledger: LoanLedger,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn ledger(&self) -> &LoanLedger {
        &self.ledger
    }

    pub fn add_book(&mut self, book: Book) -> Result<EntityId> {
        Ok(self.catalog.add(book)?)
    }

    pub fn add_user(&mut self, user: User) -> Result<EntityId> {
        Ok(self.registry.add(user)?)
    }

    pub fn book(&self, id: EntityId) -> Result<&Book> {
        Ok(self.catalog.get(id).ok_or(CatalogError::NotFound(id))?)
    }

    pub fn book_mut(&mut self, id: EntityId) -> Result<&mut Book> {
        Ok(self.catalog.get_mut(id).ok_or(CatalogError::NotFound(id))?)
    }

    pub fn user(&self, id: EntityId) -> Result<&User> {
        Ok(self.registry.get(id).ok_or(CatalogError::NotFound(id))?)
    }

    pub fn user_mut(&mut self, id: EntityId) -> Result<&mut User> {
        Ok(self.registry.get_mut(id).ok_or(CatalogError::NotFound(id))?)
    }

    pub fn search_books(&self, query: &BookQuery) -> Vec<&Book> {
        self.catalog.find_by(|b| query.matches(b))
    }

    pub fn search_users(&self, query: &UserQuery) -> Vec<&User> {
        self.registry.find_by(|u| query.matches(u))
    }

    pub fn borrow(&mut self, book: EntityId, user: EntityId) -> Result<()> {
        Ok(self
            .ledger
            .borrow(&mut self.catalog, &self.registry, book, user)?)
    }

    pub fn return_book(&mut self, book: EntityId, user: EntityId) -> Result<()> {
        Ok(self
            .ledger
            .return_book(&mut self.catalog, &self.registry, book, user)?)
    }

    pub fn borrowed_count_for_user(&self, user: EntityId) -> Result<Option<usize>> {
        Ok(self.ledger.borrowed_count_for_user(&self.registry, user)?)
    }

    pub fn list_outstanding_loans(&self) -> Result<Vec<OutstandingLoan<'_>>> {
        Ok(self
            .ledger
            .list_outstanding_loans(&self.catalog, &self.registry)?)
    }

    pub fn resolve(&self, id: EntityId) -> Result<EntityRef<'_>> {
        Ok(resolve(&self.catalog, &self.registry, id)?)
    }

    /// Change a book's total copies; see [`Book::set_copies`].
    pub fn set_copies(&mut self, id: EntityId, copies: u32) -> Result<()> {
        self.book_mut(id)?.set_copies(copies)?;
        tracing::info!(book = %id, copies, "copies updated");
        Ok(())
    }

    /// Delete every book matching `query`.
    ///
    /// Nothing is deleted if any matching book is on loan.
    pub fn remove_books(&mut self, query: &BookQuery) -> Result<usize> {
        let matched: Vec<EntityId> = self
            .search_books(query)
            .iter()
            .map(|b| b.id())
            .collect();
        if let Some(lent) = matched.iter().find(|id| self.ledger.is_on_loan(**id)) {
            return Err(CatalogError::HasActiveLoans(*lent).into());
        }
        Ok(self
            .catalog
            .remove_by(&query.describe(), |b| query.matches(b))?)
    }

    /// Delete one user. Rejected while they hold any book.
    pub fn remove_user(&mut self, id: EntityId) -> Result<User> {
        if self.ledger.has_loans(id) {
            return Err(CatalogError::HasActiveLoans(id).into());
        }
        Ok(self.registry.remove(id)?)
    }

    /// Users matching `query`, for the caller to pick one before
    /// [`Library::remove_user`]. Empty results are reported as
    /// [`CatalogError::NoMatch`].
    pub fn removal_candidates(&self, query: &UserQuery) -> Result<Vec<&User>> {
        let found = self.search_users(query);
        if found.is_empty() {
            return Err(CatalogError::NoMatch(query.describe()).into());
        }
        Ok(found)
    }
}
