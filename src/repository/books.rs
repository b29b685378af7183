//! Books repository backed by process-local memory.
//!
//! The whole collection lives behind a single `RwLock`: lookups share the
//! read guard, every mutation holds the write guard for its full
//! read-modify-write sequence, so concurrent checkouts can never drive a
//! quantity below zero or tear a record mid-update.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BooksRepository {
    /// Create a repository with an empty collection.
    pub fn new() -> Self {
        Self::with_seed([])
    }

    /// Create a repository pre-populated with the given books.
    pub fn with_seed(seed: impl IntoIterator<Item = Book>) -> Self {
        Self {
            books: Arc::new(RwLock::new(seed.into_iter().collect())),
        }
    }

    /// List all books, as independent copies, in insertion order.
    pub fn list(&self) -> AppResult<Vec<Book>> {
        let books = self.read_guard()?;
        Ok(books.clone())
    }

    /// Get a copy of the book with the given id.
    pub fn get_by_id(&self, id: &str) -> AppResult<Book> {
        let books = self.read_guard()?;
        let index = position(&books, id)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;
        Ok(books[index].clone())
    }

    /// Insert a new book.
    ///
    /// The id must be non-empty and not already present; the duplicate check
    /// and the insert happen under one write guard, so two concurrent creates
    /// with the same id can never both succeed.
    pub fn create(&self, new_book: CreateBook) -> AppResult<Book> {
        if new_book.id.is_empty() {
            return Err(AppError::Validation("Book id must not be empty".to_string()));
        }

        let mut books = self.write_guard()?;
        if position(&books, &new_book.id).is_some() {
            return Err(AppError::Conflict(format!(
                "Book with id {} already exists",
                new_book.id
            )));
        }

        let book = Book {
            id: new_book.id,
            title: new_book.title,
            author: new_book.author,
            quantity: new_book.quantity,
        };
        books.push(book.clone());
        Ok(book)
    }

    /// Atomically apply `delta` to a book's quantity (checkout = -1,
    /// return = +1).
    ///
    /// The existence check, the bound check and the update all run under one
    /// write guard; an adjustment that would take the quantity below zero is
    /// rejected and leaves the record untouched.
    pub fn adjust_quantity(&self, id: &str, delta: i32) -> AppResult<Book> {
        let mut books = self.write_guard()?;
        let index = position(&books, id)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

        let book = &mut books[index];
        book.quantity = book.quantity.checked_add_signed(delta).ok_or_else(|| {
            AppError::Unavailable(format!("Book with id {} is not available", id))
        })?;
        Ok(book.clone())
    }

    fn read_guard(&self) -> AppResult<RwLockReadGuard<'_, Vec<Book>>> {
        self.books
            .read()
            .map_err(|_| AppError::Internal("Book collection lock poisoned".to_string()))
    }

    fn write_guard(&self) -> AppResult<RwLockWriteGuard<'_, Vec<Book>>> {
        self.books
            .write()
            .map_err(|_| AppError::Internal("Book collection lock poisoned".to_string()))
    }
}

impl Default for BooksRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Index of the book with the given id, if present.
fn position(books: &[Book], id: &str) -> Option<usize> {
    books.iter().position(|book| book.id == id)
}
