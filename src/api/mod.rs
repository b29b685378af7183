//! API handlers for Vellum REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
