//! Data models for Vellum

pub mod book;

// Re-export commonly used types
pub use book::{Book, CreateBook};
