//! Repository layer owning the in-memory inventory

pub mod books;

use crate::models::book::Book;

/// Main repository struct holding the shared book collection
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a repository with an empty collection.
    pub fn new() -> Self {
        Self {
            books: books::BooksRepository::new(),
        }
    }

    /// Create a repository whose collection starts with the given books.
    pub fn with_seed(seed: impl IntoIterator<Item = Book>) -> Self {
        Self {
            books: books::BooksRepository::with_seed(seed),
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
