//! Vellum Book Inventory Service
//!
//! A small REST JSON API for managing a book inventory: list, lookup,
//! create, and checkout/return of copies. The whole inventory is held in
//! process memory behind a single lock; nothing is persisted.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
