//! Book inventory endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook},
};

/// Query parameters for checkout/return
#[derive(Deserialize)]
pub struct AdjustParams {
    pub id: Option<String>,
}

/// List all books in the inventory
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Full book collection in insertion order", body = Vec<Book>)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.inventory.list_books().await?;
    Ok(Json(books))
}

/// Get a book by id
#[utoipa::path(
    get,
    path = "/book/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book id")
    ),
    responses(
        (status = 200, description = "Book record", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.inventory.get_book(&id).await?;
    Ok(Json(book))
}

/// Add a new book to the inventory
#[utoipa::path(
    post,
    path = "/book/create",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Empty book id", body = crate::error::ErrorResponse),
        (status = 409, description = "Book id already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(book): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let created = state.services.inventory.create_book(book).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Check out one copy of a book
#[utoipa::path(
    patch,
    path = "/book/checkout",
    tag = "books",
    params(
        ("id" = Option<String>, Query, description = "Book id")
    ),
    responses(
        (status = 200, description = "Updated book record", body = Book),
        (status = 400, description = "Missing id parameter", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 409, description = "No copies available", body = crate::error::ErrorResponse)
    )
)]
pub async fn checkout_book(
    State(state): State<crate::AppState>,
    Query(params): Query<AdjustParams>,
) -> AppResult<Json<Book>> {
    let id = require_id(params)?;
    let book = state.services.inventory.checkout_book(&id).await?;
    Ok(Json(book))
}

/// Return one copy of a book
#[utoipa::path(
    patch,
    path = "/book/return",
    tag = "books",
    params(
        ("id" = Option<String>, Query, description = "Book id")
    ),
    responses(
        (status = 200, description = "Updated book record", body = Book),
        (status = 400, description = "Missing id parameter", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    Query(params): Query<AdjustParams>,
) -> AppResult<Json<Book>> {
    let id = require_id(params)?;
    let book = state.services.inventory.return_book(&id).await?;
    Ok(Json(book))
}

fn require_id(params: AdjustParams) -> AppResult<String> {
    params
        .id
        .ok_or_else(|| AppError::Validation("missing 'id' query parameter".to_string()))
}
