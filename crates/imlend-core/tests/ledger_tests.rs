//! Loan ledger integration tests
//!
//! Availability accounting and duplicate-loan rules, driven through
//! `Library`. The property tests replay random borrow/return sequences.

mod common;

use common::fixtures::{book, library_with, user};
use imlend_core::{Entity, EntityRef, LibraryError, LoanError};
use proptest::prelude::*;
use rstest::rstest;

// === Availability walkthrough ===

#[test]
fn test_two_copy_walkthrough() {
    let (mut lib, books, users) = library_with(&[("Middlemarch", 2)], 3);
    let (b, ua, ub, uc) = (books[0], users[0], users[1], users[2]);

    lib.borrow(b, ua).unwrap();
    assert_eq!(lib.book(b).unwrap().available_copies(), 1);

    assert_eq!(
        lib.borrow(b, ua),
        Err(LibraryError::Loan(LoanError::DuplicateLoan { book: b, user: ua }))
    );
    assert_eq!(lib.book(b).unwrap().available_copies(), 1);

    lib.borrow(b, ub).unwrap();
    assert_eq!(lib.book(b).unwrap().available_copies(), 0);

    assert_eq!(
        lib.borrow(b, uc),
        Err(LibraryError::Loan(LoanError::NoCopiesAvailable(b)))
    );

    lib.return_book(b, ua).unwrap();
    assert_eq!(lib.book(b).unwrap().available_copies(), 1);
}

#[test]
fn test_borrowed_count_after_partial_return() {
    let (mut lib, books, users) = library_with(&[("B1", 1), ("B2", 1)], 1);
    let u = users[0];
    lib.borrow(books[0], u).unwrap();
    lib.borrow(books[1], u).unwrap();
    lib.return_book(books[0], u).unwrap();
    assert_eq!(lib.borrowed_count_for_user(u), Ok(Some(1)));
}

#[test]
fn test_unregistered_entities_are_rejected() {
    let (mut lib, books, users) = library_with(&[("B1", 1)], 1);
    let stray_book = book("Stray", 1);
    let stray_user = user("stray");

    assert_eq!(
        lib.borrow(stray_book.id(), users[0]),
        Err(LibraryError::Loan(LoanError::UnknownBook(stray_book.id())))
    );
    assert_eq!(
        lib.borrow(books[0], stray_user.id()),
        Err(LibraryError::Loan(LoanError::UnknownUser(stray_user.id())))
    );
    assert_eq!(
        lib.return_book(books[0], stray_user.id()),
        Err(LibraryError::Loan(LoanError::UnknownUser(stray_user.id())))
    );
    assert_eq!(lib.book(books[0]).unwrap().available_copies(), 1);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
fn test_exhausting_copies(#[case] copies: u32) {
    let (mut lib, books, users) = library_with(&[("Many", copies)], copies as usize + 1);
    for u in users.iter().take(copies as usize) {
        lib.borrow(books[0], *u).unwrap();
    }
    assert_eq!(lib.book(books[0]).unwrap().available_copies(), 0);
    let last = users[copies as usize];
    assert_eq!(
        lib.borrow(books[0], last),
        Err(LibraryError::Loan(LoanError::NoCopiesAvailable(books[0])))
    );
    assert_eq!(lib.ledger().holders_of(books[0]).len(), copies as usize);
}

#[rstest]
#[case::never_borrowed(false)]
#[case::already_returned(true)]
fn test_return_without_loan(#[case] borrow_first: bool) {
    let (mut lib, books, users) = library_with(&[("B1", 1)], 1);
    if borrow_first {
        lib.borrow(books[0], users[0]).unwrap();
        lib.return_book(books[0], users[0]).unwrap();
    }
    assert_eq!(
        lib.return_book(books[0], users[0]),
        Err(LibraryError::Loan(LoanError::NotBorrowed {
            book: books[0],
            user: users[0]
        }))
    );
    assert_eq!(lib.book(books[0]).unwrap().available_copies(), 1);
}

#[test]
fn test_outstanding_loans_resolve_entities() {
    let (mut lib, books, users) = library_with(&[("B1", 2), ("B2", 1), ("B3", 1)], 2);
    lib.borrow(books[1], users[0]).unwrap();
    lib.borrow(books[0], users[1]).unwrap();
    lib.borrow(books[0], users[0]).unwrap();

    let loans = lib.list_outstanding_loans().unwrap();
    let summary: Vec<(&str, Vec<&str>)> = loans
        .iter()
        .map(|l| (l.book.title(), l.holders.iter().map(|u| u.username()).collect()))
        .collect();
    assert_eq!(
        summary,
        vec![("B2", vec!["user0"]), ("B1", vec!["user1", "user0"])]
    );

    match lib.resolve(users[1]).unwrap() {
        EntityRef::User(u) => assert_eq!(u.username(), "user1"),
        EntityRef::Book(_) => panic!("expected a user"),
    }
}

// === Property-based tests ===

#[derive(Debug, Clone)]
enum Op {
    Borrow(usize, usize),
    Return(usize, usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..3usize, 0..4usize).prop_map(|(b, u)| Op::Borrow(b, u)),
        (0..3usize, 0..4usize).prop_map(|(b, u)| Op::Return(b, u)),
    ]
}

proptest! {
    #[test]
    fn test_availability_invariant_holds(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let (mut lib, books, users) = library_with(&[("A", 1), ("B", 2), ("C", 3)], 4);

        for op in ops {
            let (b, u, is_borrow) = match op {
                Op::Borrow(b, u) => (books[b], users[u], true),
                Op::Return(b, u) => (books[b], users[u], false),
            };
            let before = lib.book(b).unwrap().available_copies();
            let held = lib.ledger().is_held_by(b, u);

            let result = if is_borrow { lib.borrow(b, u) } else { lib.return_book(b, u) };
            let after = lib.book(b).unwrap().available_copies();

            match (is_borrow, result.is_ok()) {
                (true, true) => {
                    prop_assert_eq!(after, before - 1);
                }
                (false, true) => {
                    prop_assert_eq!(after, before + 1);
                }
                _ => {
                    prop_assert_eq!(after, before);
                }
            }
            if is_borrow && held {
                prop_assert!(result.is_err());
            }
            if !is_borrow && !held {
                prop_assert!(result.is_err());
            }

            for id in &books {
                let book = lib.book(*id).unwrap();
                prop_assert!(book.available_copies() <= book.total_copies());
                prop_assert_eq!(
                    lib.ledger().holders_of(*id).len() as u32,
                    book.on_loan()
                );
            }
        }
    }

    #[test]
    fn test_borrowed_count_matches_ledger(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let (mut lib, books, users) = library_with(&[("A", 1), ("B", 2), ("C", 3)], 4);
        for op in ops {
            let _ = match op {
                Op::Borrow(b, u) => lib.borrow(books[b], users[u]),
                Op::Return(b, u) => lib.return_book(books[b], users[u]),
            };
        }
        for u in &users {
            let held = books.iter().filter(|b| lib.ledger().is_held_by(**b, *u)).count();
            let expected = if held == 0 { None } else { Some(held) };
            prop_assert_eq!(lib.borrowed_count_for_user(*u).unwrap(), expected);
        }
    }
}
