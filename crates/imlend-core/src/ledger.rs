//! Loan ledger: who currently holds which book.
//!
//! The ledger stores identifiers only. Books and users stay owned by the
//! [`Catalog`] and [`Registry`]; the ledger borrows them per call to check
//! membership, adjust availability, and resolve identifiers for display.
//!
//! Entries are kept in the order books were first lent, and each entry's
//! holders in the order they borrowed. A book's entry disappears once its
//! last holder returns it.

use std::collections::HashMap;

use crate::book::Book;
use crate::collection::{Catalog, Registry};
use crate::error::LoanError;
use crate::identity::EntityId;
use crate::user::User;

/// Active loans of one book.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LoanEntry {
    book: EntityId,
    holders: Vec<EntityId>,
}

/// An entity resolved from an identifier.
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    Book(&'a Book),
    User(&'a User),
}

/// A book with everyone currently holding a copy.
#[derive(Debug, Clone)]
pub struct OutstandingLoan<'a> {
    pub book: &'a Book,
    pub holders: Vec<&'a User>,
}

/// Reverse index from user to the books they hold.
pub type Holdings = HashMap<EntityId, Vec<EntityId>>;

/// The forward book -> holders mapping of active loans.
#[derive(Debug, Clone, Default)]
pub struct LoanLedger {
    entries: Vec<LoanEntry>,
}

impl LoanLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lend one copy of `book_id` to `user_id`.
    ///
    /// Checks, in order: the book is catalogued, the user is registered, a
    /// copy is available, and the user does not already hold this book.
    /// On success the pair is recorded and one available copy is taken.
    pub fn borrow(
        &mut self,
        catalog: &mut Catalog,
        registry: &Registry,
        book_id: EntityId,
        user_id: EntityId,
    ) -> Result<(), LoanError> {
        let book = catalog
            .get_mut(book_id)
            .ok_or(LoanError::UnknownBook(book_id))?;
        if !registry.contains_id(user_id) {
            return Err(LoanError::UnknownUser(user_id));
        }
        if book.available_copies() == 0 {
            tracing::debug!(book = %book_id, "no copies available");
            return Err(LoanError::NoCopiesAvailable(book_id));
        }
        if self.is_held_by(book_id, user_id) {
            tracing::debug!(book = %book_id, user = %user_id, "duplicate loan rejected");
            return Err(LoanError::DuplicateLoan {
                book: book_id,
                user: user_id,
            });
        }
        if !book.take_copy() {
            return Err(LoanError::NoCopiesAvailable(book_id));
        }

        match self.entries.iter_mut().find(|e| e.book == book_id) {
            Some(entry) => entry.holders.push(user_id),
            None => self.entries.push(LoanEntry {
                book: book_id,
                holders: vec![user_id],
            }),
        }
        tracing::info!(book = %book_id, user = %user_id, "book borrowed");
        Ok(())
    }

    /// Take back the copy of `book_id` held by `user_id`.
    pub fn return_book(
        &mut self,
        catalog: &mut Catalog,
        registry: &Registry,
        book_id: EntityId,
        user_id: EntityId,
    ) -> Result<(), LoanError> {
        let book = catalog
            .get_mut(book_id)
            .ok_or(LoanError::UnknownBook(book_id))?;
        if !registry.contains_id(user_id) {
            return Err(LoanError::UnknownUser(user_id));
        }

        let not_borrowed = LoanError::NotBorrowed {
            book: book_id,
            user: user_id,
        };
        let entry_pos = self
            .entries
            .iter()
            .position(|e| e.book == book_id)
            .ok_or_else(|| not_borrowed.clone())?;
        let entry = &mut self.entries[entry_pos];
        let holder_pos = entry
            .holders
            .iter()
            .position(|h| *h == user_id)
            .ok_or(not_borrowed)?;

        entry.holders.remove(holder_pos);
        if entry.holders.is_empty() {
            self.entries.remove(entry_pos);
        }
        if !book.return_copy() {
            tracing::warn!(book = %book_id, "returned copy exceeds total copies");
        }
        tracing::info!(book = %book_id, user = %user_id, "book returned");
        Ok(())
    }

    /// Invert the ledger into user -> books, in ledger order.
    ///
    /// Rebuilt from the forward entries on every call so the two views can
    /// never diverge.
    pub fn holdings(&self) -> Holdings {
        let mut by_user: Holdings = HashMap::new();
        for entry in &self.entries {
            for user in &entry.holders {
                by_user.entry(*user).or_default().push(entry.book);
            }
        }
        tracing::debug!(users = by_user.len(), "rebuilt holdings index");
        by_user
    }

    /// Number of books `user_id` currently holds, or `None` if they hold none.
    pub fn borrowed_count_for_user(
        &self,
        registry: &Registry,
        user_id: EntityId,
    ) -> Result<Option<usize>, LoanError> {
        if !registry.contains_id(user_id) {
            return Err(LoanError::UnknownUser(user_id));
        }
        Ok(self.holdings().get(&user_id).map(Vec::len))
    }

    /// Books held by `user_id`, in ledger order.
    pub fn books_held_by(&self, user_id: EntityId) -> Vec<EntityId> {
        self.holdings().remove(&user_id).unwrap_or_default()
    }

    /// Users holding `book_id`, in borrow order.
    pub fn holders_of(&self, book_id: EntityId) -> &[EntityId] {
        self.entries
            .iter()
            .find(|e| e.book == book_id)
            .map(|e| e.holders.as_slice())
            .unwrap_or_default()
    }

    /// Whether `user_id` holds a copy of `book_id`.
    pub fn is_held_by(&self, book_id: EntityId, user_id: EntityId) -> bool {
        self.holders_of(book_id).contains(&user_id)
    }

    /// Whether any copy of `book_id` is on loan.
    pub fn is_on_loan(&self, book_id: EntityId) -> bool {
        !self.holders_of(book_id).is_empty()
    }

    /// Whether `user_id` holds any book.
    pub fn has_loans(&self, user_id: EntityId) -> bool {
        self.entries.iter().any(|e| e.holders.contains(&user_id))
    }

    /// Total number of active (book, user) loans.
    pub fn loan_count(&self) -> usize {
        self.entries.iter().map(|e| e.holders.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every lent book with its holders, resolved to entities.
    pub fn list_outstanding_loans<'a>(
        &self,
        catalog: &'a Catalog,
        registry: &'a Registry,
    ) -> Result<Vec<OutstandingLoan<'a>>, LoanError> {
        self.entries
            .iter()
            .filter(|e| !e.holders.is_empty())
            .map(|entry| {
                let book = catalog
                    .get(entry.book)
                    .ok_or(LoanError::NotFound(entry.book))?;
                let holders = entry
                    .holders
                    .iter()
                    .map(|id| registry.get(*id).ok_or(LoanError::NotFound(*id)))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(OutstandingLoan { book, holders })
            })
            .collect()
    }
}

/// Look an identifier up in the catalog, then the registry.
pub fn resolve<'a>(
    catalog: &'a Catalog,
    registry: &'a Registry,
    id: EntityId,
) -> Result<EntityRef<'a>, LoanError> {
    if let Some(book) = catalog.get(id) {
        return Ok(EntityRef::Book(book));
    }
    registry
        .get(id)
        .map(EntityRef::User)
        .ok_or(LoanError::NotFound(id))
}
