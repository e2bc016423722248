//! The embedded, read-only book catalog.
//!
//! Records are part of the binary's static data: they are never added,
//! removed or mutated, so lookups need no synchronization.

use crate::error::{BookshelfError, Result};
use crate::model::Book;

static BOOKS: [Book; 4] = [
    Book::new(1, "The Awakening", "Kate Chopin", 458295425),
    Book::new(2, "City of Glass", "Paul Auster", 650276225),
    Book::new(3, "IT", "Stephen King", 713434625),
    // Deliberately far in the future; must be formatted as-is.
    Book::new(4, "Clean Code", "Uncle BOB", 3243463441253),
];

#[derive(Debug, Clone, Copy)]
pub struct BookCatalog {
    books: &'static [Book],
}

impl Default for BookCatalog {
    fn default() -> Self {
        Self::embedded()
    }
}

impl BookCatalog {
    /// The catalog compiled into the binary.
    pub fn embedded() -> Self {
        Self { books: &BOOKS }
    }

    pub fn from_static(books: &'static [Book]) -> Self {
        Self { books }
    }

    /// All books in insertion order.
    pub fn all(&self) -> &'static [Book] {
        self.books
    }

    /// First book whose id equals `id`.
    pub fn find(&self, id: i32) -> Option<&'static Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn get(&self, id: i32) -> Result<&'static Book> {
        self.find(id).ok_or(BookshelfError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
