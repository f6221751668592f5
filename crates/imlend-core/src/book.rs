//! Book domain model

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::error::CatalogError;
use crate::identity::{Entity, EntityId};

/// A book title held by the library, with its copy accounting.
///
/// `available_copies` never exceeds `total_copies`. The difference between
/// them is the number of copies currently on loan; only the loan ledger and
/// [`Book::set_copies`] change it.
#[derive(Clone, Debug, Serialize)]
pub struct Book {
    id: EntityId,
    title: String,
    authors: Vec<String>,
    year: i32,
    publisher: String,
    total_copies: u32,
    available_copies: u32,
    publication_date: NaiveDate,
}

impl Book {
    /// Create a new book with all copies available.
    pub fn new(title: impl Into<String>, copies: u32, publication_date: NaiveDate) -> Self {
        Self {
            id: EntityId::new(),
            title: title.into(),
            authors: Vec::new(),
            year: chrono::Datelike::year(&publication_date),
            publisher: String::new(),
            total_copies: copies,
            available_copies: copies,
            publication_date,
        }
    }

    /// Set the author list
    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    /// Set the year
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Set the publisher
    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = publisher.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn add_author(&mut self, name: impl Into<String>) {
        self.authors.push(name.into());
    }

    pub fn clear_authors(&mut self) {
        self.authors.clear();
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn set_year(&mut self, year: i32) {
        self.year = year;
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn set_publisher(&mut self, publisher: impl Into<String>) {
        self.publisher = publisher.into();
    }

    pub fn publication_date(&self) -> NaiveDate {
        self.publication_date
    }

    pub fn set_publication_date(&mut self, date: NaiveDate) {
        self.publication_date = date;
    }

    pub fn total_copies(&self) -> u32 {
        self.total_copies
    }

    pub fn available_copies(&self) -> u32 {
        self.available_copies
    }

    /// Number of copies currently on loan.
    pub fn on_loan(&self) -> u32 {
        self.total_copies - self.available_copies
    }

    /// Change the total number of copies, keeping the on-loan count.
    ///
    /// Available copies become `new_total - on_loan`. A total smaller than
    /// the number of copies on loan is rejected and the book is left
    /// unchanged.
    pub fn set_copies(&mut self, new_total: u32) -> Result<(), CatalogError> {
        let on_loan = self.on_loan();
        let available = new_total
            .checked_sub(on_loan)
            .ok_or(CatalogError::CopiesBelowOnLoan {
                requested: new_total,
                on_loan,
            })?;
        self.total_copies = new_total;
        self.available_copies = available;
        Ok(())
    }

    /// Take one copy off the shelf. Returns false when none are available.
    pub(crate) fn take_copy(&mut self) -> bool {
        match self.available_copies.checked_sub(1) {
            Some(left) => {
                self.available_copies = left;
                true
            }
            None => false,
        }
    }

    /// Put one copy back. Returns false when every copy is already shelved.
    pub(crate) fn return_copy(&mut self) -> bool {
        if self.available_copies < self.total_copies {
            self.available_copies += 1;
            true
        } else {
            false
        }
    }
}

impl Entity for Book {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Book title: {}", self.title)?;
        writeln!(f, "Author(s): {}", self.authors.join(", "))?;
        writeln!(f, "Year: {}", self.year)?;
        writeln!(f, "Publisher: {}", self.publisher)?;
        writeln!(f, "No of available copies: {}", self.available_copies)?;
        write!(f, "Publication date: {}", self.publication_date)
    }
}
