//! Book model and request types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Book record held by the inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Unique identifier, assigned by the caller at creation
    pub id: String,
    pub title: String,
    pub author: String,
    /// Number of copies currently available for checkout
    pub quantity: u32,
}

/// Create book request
///
/// Absent fields default (empty strings, zero quantity); the store rejects
/// an empty `id` outright.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateBook {
    /// Unique identifier for the new book (must not be empty)
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    /// Initial number of available copies
    #[serde(default)]
    pub quantity: u32,
}
