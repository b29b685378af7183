//! Inventory service for the book collection

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct InventoryService {
    repository: Repository,
}

impl InventoryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all books in insertion order.
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list()
    }

    /// Get a single book by id.
    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        self.repository.books.get_by_id(id)
    }

    /// Add a new book to the inventory.
    pub async fn create_book(&self, book: CreateBook) -> AppResult<Book> {
        self.repository.books.create(book)
    }

    /// Check out one copy of a book.
    pub async fn checkout_book(&self, id: &str) -> AppResult<Book> {
        self.repository.books.adjust_quantity(id, -1)
    }

    /// Return one copy of a book.
    pub async fn return_book(&self, id: &str) -> AppResult<Book> {
        self.repository.books.adjust_quantity(id, 1)
    }
}
