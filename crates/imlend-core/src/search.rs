//! Query types for filtering books and users.
//!
//! All string comparisons are case-insensitive equality; publication dates
//! compare exactly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::book::Book;
use crate::user::User;

/// A query over the book catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookQuery {
    /// Title equals
    Title(String),
    /// Any author equals
    Author(String),
    /// Publisher equals
    Publisher(String),
    /// Publication date equals
    PublicationDate(NaiveDate),
}

impl BookQuery {
    pub fn matches(&self, book: &Book) -> bool {
        match self {
            BookQuery::Title(title) => eq_ignore_case(book.title(), title),
            BookQuery::Author(name) => book.authors().iter().any(|a| eq_ignore_case(a, name)),
            BookQuery::Publisher(publisher) => eq_ignore_case(book.publisher(), publisher),
            BookQuery::PublicationDate(date) => book.publication_date() == *date,
        }
    }

    /// Short human-readable description, e.g. `title "Dune"`.
    pub fn describe(&self) -> String {
        match self {
            BookQuery::Title(t) => format!("title \"{t}\""),
            BookQuery::Author(a) => format!("author \"{a}\""),
            BookQuery::Publisher(p) => format!("publisher \"{p}\""),
            BookQuery::PublicationDate(d) => format!("publication date {d}"),
        }
    }
}

/// A query over the user registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserQuery {
    Firstname(String),
    Surname(String),
    Username(String),
}

impl UserQuery {
    pub fn matches(&self, user: &User) -> bool {
        match self {
            UserQuery::Firstname(name) => eq_ignore_case(user.firstname(), name),
            UserQuery::Surname(name) => eq_ignore_case(user.surname(), name),
            UserQuery::Username(name) => eq_ignore_case(user.username(), name),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            UserQuery::Firstname(n) => format!("firstname \"{n}\""),
            UserQuery::Surname(n) => format!("surname \"{n}\""),
            UserQuery::Username(n) => format!("username \"{n}\""),
        }
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::Address;

    fn dune() -> Book {
        Book::new("Dune", 1, NaiveDate::from_ymd_opt(1965, 8, 1).unwrap())
            .with_authors(["Frank Herbert"])
            .with_publisher("Chilton Books")
    }

    #[test]
    fn title_is_case_insensitive() {
        assert!(BookQuery::Title("dUNE".into()).matches(&dune()));
        assert!(!BookQuery::Title("Dune Messiah".into()).matches(&dune()));
    }

    #[test]
    fn author_matches_any_author() {
        let book = dune().with_authors(["Someone", "Frank Herbert"]);
        assert!(BookQuery::Author("frank herbert".into()).matches(&book));
        assert!(!BookQuery::Author("Frank".into()).matches(&book));
    }

    #[test]
    fn publisher_and_date() {
        assert!(BookQuery::Publisher("chilton books".into()).matches(&dune()));
        let date = NaiveDate::from_ymd_opt(1965, 8, 1).unwrap();
        assert!(BookQuery::PublicationDate(date).matches(&dune()));
        assert!(!BookQuery::PublicationDate(date.succ_opt().unwrap()).matches(&dune()));
    }

    #[test]
    fn user_firstname() {
        let user = User::new(
            "grace",
            "Grace",
            "Hopper",
            Address::new(1, "Main", "10001"),
            "grace@navy.mil",
            NaiveDate::from_ymd_opt(1906, 12, 9).unwrap(),
        );
        assert!(UserQuery::Firstname("GRACE".into()).matches(&user));
        assert!(UserQuery::Surname("hopper".into()).matches(&user));
        assert!(!UserQuery::Username("hopper".into()).matches(&user));
    }

    #[test]
    fn describe() {
        assert_eq!(BookQuery::Title("Dune".into()).describe(), "title \"Dune\"");
        assert_eq!(UserQuery::Firstname("Ada".into()).describe(), "firstname \"Ada\"");
    }
}
