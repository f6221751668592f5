//! Catalog and registry integration tests

mod common;

use common::fixtures::{book, date, library_with, user};
use imlend_core::{BookQuery, CatalogError, Entity, LibraryError, UserQuery};
use rstest::rstest;

#[test]
fn test_readding_same_entity_is_a_noop() {
    let (mut lib, _, _) = library_with(&[], 0);
    let b = book("Dune", 1);
    let again = b.clone();
    lib.add_book(b).unwrap();
    assert_eq!(
        lib.add_book(again.clone()),
        Err(LibraryError::Catalog(CatalogError::Duplicate(again.id())))
    );
    assert_eq!(lib.catalog().len(), 1);

    let u = user("ada");
    let u_again = u.clone();
    lib.add_user(u).unwrap();
    assert!(lib.add_user(u_again).is_err());
    assert_eq!(lib.registry().len(), 1);
}

#[rstest]
#[case(BookQuery::Title("the hobbit".into()), 2)]
#[case(BookQuery::Author("J. R. R. TOLKIEN".into()), 2)]
#[case(BookQuery::Author("C. S. Lewis".into()), 1)]
#[case(BookQuery::Publisher("allen & unwin".into()), 3)]
#[case(BookQuery::PublicationDate(date(1937, 9, 21)), 1)]
#[case(BookQuery::Title("Silmarillion".into()), 0)]
fn test_book_search(#[case] query: BookQuery, #[case] expected: usize) {
    let (mut lib, _, _) = library_with(&[], 0);
    lib.add_book(
        book("The Hobbit", 1)
            .with_authors(["J. R. R. Tolkien"])
            .with_publisher("Allen & Unwin"),
    )
    .unwrap();
    let mut reprint = book("The Hobbit", 1)
        .with_authors(["J. R. R. Tolkien"])
        .with_publisher("Allen & Unwin");
    reprint.set_publication_date(date(1937, 9, 21));
    lib.add_book(reprint).unwrap();
    lib.add_book(
        book("Out of the Silent Planet", 1)
            .with_authors(["C. S. Lewis"])
            .with_publisher("Allen & Unwin"),
    )
    .unwrap();

    assert_eq!(lib.search_books(&query).len(), expected);
}

#[test]
fn test_search_preserves_catalog_order() {
    let (lib, ids, _) = library_with(&[("Same", 1), ("Other", 1), ("same", 1)], 0);
    let found: Vec<_> = lib
        .search_books(&BookQuery::Title("SAME".into()))
        .iter()
        .map(|b| b.id())
        .collect();
    assert_eq!(found, vec![ids[0], ids[2]]);
}

#[test]
fn test_user_removal_by_firstname() {
    let (mut lib, _, _) = library_with(&[], 0);
    let mut first = user("jo1");
    first.set_firstname("Jo");
    let mut second = user("jo2");
    second.set_firstname("jo");
    lib.add_user(first).unwrap();
    let second_id = lib.add_user(second).unwrap();

    let candidates: Vec<_> = lib
        .removal_candidates(&UserQuery::Firstname("JO".into()))
        .unwrap()
        .iter()
        .map(|u| u.id())
        .collect();
    assert_eq!(candidates.len(), 2);

    let removed = lib.remove_user(candidates[1]).unwrap();
    assert_eq!(removed.id(), second_id);
    assert_eq!(lib.registry().len(), 1);
}
