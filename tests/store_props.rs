//! Property-based tests for the book store's ordering and id invariants.

use std::collections::HashSet;

use bookshelf::{Book, BookStore};
use proptest::prelude::*;

fn book(id: &str, title: &str) -> Book {
    Book { id: id.to_owned(), title: title.to_owned(), ..Book::default() }
}

fn ids(books: &[Book]) -> Vec<String> {
    books.iter().map(|b| b.id.clone()).collect()
}

proptest! {
    /// Created ids never repeat and never equal an id supplied in the body.
    #[test]
    fn created_ids_are_fresh(titles in prop::collection::vec("[a-z]{0,8}", 1..40)) {
        let store = BookStore::seeded();
        let mut seen: HashSet<String> = HashSet::from(["1".to_owned()]);
        for title in &titles {
            let created = store.create(book("1", title));
            prop_assert!(!created.id.is_empty());
            prop_assert!(seen.insert(created.id.clone()));
            prop_assert_eq!(&created.title, title);
        }
        prop_assert_eq!(store.len(), titles.len() + 1);
    }

    /// Delete removes exactly the first match and keeps everything else in order.
    #[test]
    fn delete_removes_first_match_only(
        shelf in prop::collection::vec("[abc]", 0..20),
        target in "[abcd]",
    ) {
        let store = BookStore::from_books(shelf.iter().map(|id| book(id, "")).collect());
        let left = ids(&store.delete(&target));

        let mut expected = shelf.clone();
        if let Some(i) = expected.iter().position(|id| *id == target) {
            expected.remove(i);
        }
        prop_assert_eq!(left, expected);
    }

    /// A matching update is a remove followed by an append at the tail.
    #[test]
    fn update_moves_to_tail(
        shelf in prop::collection::vec("[abc]", 0..20),
        target in "[abcd]",
        title in "[A-Z]{1,6}",
    ) {
        let store = BookStore::from_books(shelf.iter().map(|id| book(id, "")).collect());
        let before = store.list();
        let result = store.update(&target, book("ignored", &title));

        match shelf.iter().position(|id| *id == target) {
            Some(i) => {
                let mut expected = before.clone();
                expected.remove(i);
                expected.push(book(&target, &title));
                prop_assert_eq!(result, Some(book(&target, &title)));
                prop_assert_eq!(store.list(), expected);
            }
            None => {
                prop_assert_eq!(result, None);
                prop_assert_eq!(store.list(), before);
            }
        }
    }
}
