//! Shared test fixtures

use chrono::NaiveDate;
use imlend_core::{Address, Book, EntityId, Library, User};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn book(title: &str, copies: u32) -> Book {
    Book::new(title, copies, date(1999, 9, 9))
        .with_authors(["Test Author"])
        .with_publisher("Test Press")
}

pub fn user(username: &str) -> User {
    User::new(
        username,
        username,
        "Reader",
        Address::new(10, "Library Lane", "LB1 1LL"),
        format!("{username}@example.com"),
        date(1980, 1, 1),
    )
}

/// A library with the given books and `users` registered users.
pub fn library_with(books: &[(&str, u32)], users: usize) -> (Library, Vec<EntityId>, Vec<EntityId>) {
    let mut lib = Library::new();
    let book_ids = books
        .iter()
        .map(|(title, copies)| lib.add_book(book(title, *copies)).unwrap())
        .collect();
    let user_ids = (0..users)
        .map(|i| lib.add_user(user(&format!("user{i}"))).unwrap())
        .collect();
    (lib, book_ids, user_ids)
}
