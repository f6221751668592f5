//! Error types for imlend-core

use thiserror::Error;

use crate::identity::EntityId;

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, LibraryError>;

/// Main error type for library operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    /// Catalog or registry errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Loan ledger errors
    #[error("Loan error: {0}")]
    Loan(#[from] LoanError),
}

/// Errors from the book catalog and user registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// An entity with this identifier is already stored
    #[error("Entity already registered: {0}")]
    Duplicate(EntityId),

    /// No entity with this identifier is stored
    #[error("Entity not found: {0}")]
    NotFound(EntityId),

    /// A field-based removal or lookup matched nothing
    #[error("No entity matches {0}")]
    NoMatch(String),

    /// The new copy count would leave fewer copies than are on loan
    #[error("Cannot set copies to {requested}: {on_loan} copies are on loan")]
    CopiesBelowOnLoan { requested: u32, on_loan: u32 },

    /// The entity still appears in the loan ledger
    #[error("Entity {0} has active loans")]
    HasActiveLoans(EntityId),
}

/// Errors from the loan ledger
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoanError {
    /// Book is not in the catalog
    #[error("Book has not been added to the catalog: {0}")]
    UnknownBook(EntityId),

    /// User is not in the registry
    #[error("User has not been added to the registry: {0}")]
    UnknownUser(EntityId),

    /// Every copy of the book is on loan
    #[error("No copies of book {0} are available")]
    NoCopiesAvailable(EntityId),

    /// User already holds a copy of this book
    #[error("User {user} already borrowed book {book}")]
    DuplicateLoan { book: EntityId, user: EntityId },

    /// User does not hold a copy of this book
    #[error("User {user} did not borrow book {book}")]
    NotBorrowed { book: EntityId, user: EntityId },

    /// Identifier is in neither the catalog nor the registry
    #[error("Identifier not found: {0}")]
    NotFound(EntityId),
}

impl LibraryError {
    /// Whether this error reports an unknown identifier.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LibraryError::Catalog(CatalogError::NotFound(_))
                | LibraryError::Loan(
                    LoanError::UnknownBook(_) | LoanError::UnknownUser(_) | LoanError::NotFound(_)
                )
        )
    }
}
