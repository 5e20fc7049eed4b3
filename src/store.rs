//! The in-memory book collection.
//!
//! One ordered `Vec<Book>` and one id counter behind a single mutex. Every
//! operation takes the lock for its whole scan-and-mutate step, so
//! operations are serialized relative to each other. Nothing inside a
//! critical section blocks on I/O.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::book::Book;

/// Counter value at startup. The first created book gets `"2"`, one above
/// the seed book's id.
const FIRST_COUNTER: u64 = 1;

/// The book created at startup before any request is served.
pub fn seed_book() -> Book {
    Book {
        id: "1".to_owned(),
        title: "The Go Programming Language".to_owned(),
        author: "Alan A. A. Donovan & Brian W. Kernighan".to_owned(),
        published_date: "2015-10-26".to_owned(),
        cover_image_url: "https://covers.openlibrary.org/b/id/8263238-L.jpg".to_owned(),
    }
}

/// The shared, mutex-guarded shelf of books.
///
/// Share it across handlers with `Arc<BookStore>`.
pub struct BookStore {
    shelf: Mutex<Shelf>,
}

struct Shelf {
    books: Vec<Book>,
    counter: u64,
}

impl BookStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::from_books(Vec::new())
    }

    /// A store holding only the [seed book](seed_book).
    pub fn seeded() -> Self {
        Self::from_books(vec![seed_book()])
    }

    /// A store holding `books` in the given order, ids untouched.
    pub fn from_books(books: Vec<Book>) -> Self {
        Self {
            shelf: Mutex::new(Shelf { books, counter: FIRST_COUNTER }),
        }
    }

    // Every critical section leaves the shelf consistent, so a panic on
    // another thread does not invalidate the data.
    fn shelf(&self) -> MutexGuard<'_, Shelf> {
        self.shelf.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Every book, in storage order.
    pub fn list(&self) -> Vec<Book> {
        self.shelf().books.clone()
    }

    /// The first book whose id equals `id`.
    pub fn get(&self, id: &str) -> Option<Book> {
        self.shelf().books.iter().find(|b| b.id == id).cloned()
    }

    /// Assigns a fresh id to `book` and appends it.
    ///
    /// Any id already on `book` is discarded.
    pub fn create(&self, mut book: Book) -> Book {
        let mut shelf = self.shelf();
        shelf.counter += 1;
        book.id = shelf.counter.to_string();
        shelf.books.push(book.clone());
        debug!(id = %book.id, total = shelf.books.len(), "book created");
        book
    }

    /// Removes the first book with `id` and appends `book` in its place at
    /// the tail, carrying `id`.
    ///
    /// Returns `None`, leaving the shelf untouched, when no book has `id`.
    pub fn update(&self, id: &str, mut book: Book) -> Option<Book> {
        let mut shelf = self.shelf();
        let index = shelf.books.iter().position(|b| b.id == id)?;
        shelf.books.remove(index);
        book.id = id.to_owned();
        shelf.books.push(book.clone());
        debug!(id, from = index, to = shelf.books.len() - 1, "book updated");
        Some(book)
    }

    /// Removes the first book with `id`, if any, and returns what is left.
    pub fn delete(&self, id: &str) -> Vec<Book> {
        let mut shelf = self.shelf();
        if let Some(index) = shelf.books.iter().position(|b| b.id == id) {
            shelf.books.remove(index);
            debug!(id, total = shelf.books.len(), "book deleted");
        }
        shelf.books.clone()
    }

    pub fn len(&self) -> usize {
        self.shelf().books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for BookStore {
    fn default() -> Self { Self::new() }
}
