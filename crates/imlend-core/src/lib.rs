//! imlend-core: book catalog, user registry, and loan ledger.
//!
//! This crate provides the bookkeeping behind the imlend console:
//! - Identity: permanent identifiers assigned at construction
//! - Book, User: the catalogued entities
//! - Catalog, Registry: ordered collections keyed by identifier
//! - LoanLedger: who holds which book, with availability accounting
//! - Library: the aggregate the console drives

pub mod book;
pub mod collection;
pub mod error;
pub mod identity;
pub mod ledger;
pub mod library;
pub mod search;
pub mod user;
pub mod validation;

pub use book::*;
pub use collection::*;
pub use error::*;
pub use identity::*;
pub use ledger::*;
pub use library::*;
pub use search::*;
pub use user::*;
pub use validation::*;
