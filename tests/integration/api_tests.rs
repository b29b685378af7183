//! API integration tests
//!
//! These run against a live server seeded with the default catalog:
//! `cargo run`, then `cargo test -- --ignored`.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

/// Id unique across test runs, so create tests stay re-runnable against
/// the same server process.
fn unique_id(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    format!("{}-{}", prefix, nanos)
}

/// Helper to create a book and return its parsed record
async fn create_book(client: &Client, id: &str, quantity: u32) -> Value {
    let response = client
        .post(format!("{}/book/create", BASE_URL))
        .json(&json!({
            "id": id,
            "title": "Test Book",
            "author": "Test Author",
            "quantity": quantity
        }))
        .send()
        .await
        .expect("Failed to send create request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse create response")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/healthz", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body = response.text().await.expect("Failed to read response body");
    assert_eq!(body, "ok");
}

#[tokio::test]
#[ignore]
async fn test_list_books() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let books = body.as_array().expect("Expected a JSON array");
    for book in books {
        assert!(book["id"].is_string());
        assert!(book["title"].is_string());
        assert!(book["author"].is_string());
        assert!(book["quantity"].is_number());
    }
}

#[tokio::test]
#[ignore]
async fn test_get_seeded_book() {
    let client = Client::new();

    let response = client
        .get(format!("{}/book/1", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], "1");
    assert_eq!(body["title"], "In Search of Lost Time");
}

#[tokio::test]
#[ignore]
async fn test_get_unknown_book() {
    let client = Client::new();

    let response = client
        .get(format!("{}/book/{}", BASE_URL, unique_id("missing")))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "NoSuchBook");
}

#[tokio::test]
#[ignore]
async fn test_create_book_and_duplicate() {
    let client = Client::new();
    let id = unique_id("create");

    let created = create_book(&client, &id, 4).await;
    assert_eq!(created["id"], id.as_str());
    assert_eq!(created["quantity"], 4);

    // The record is now listed
    let response = client
        .get(format!("{}/book/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    // A second create with the same id conflicts
    let response = client
        .post(format!("{}/book/create", BASE_URL))
        .json(&json!({
            "id": id,
            "title": "Other Title",
            "author": "Other Author",
            "quantity": 1
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Duplicate");
}

#[tokio::test]
#[ignore]
async fn test_create_book_empty_id() {
    let client = Client::new();

    let response = client
        .post(format!("{}/book/create", BASE_URL))
        .json(&json!({
            "id": "",
            "title": "Anonymous",
            "author": "Nobody",
            "quantity": 1
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
#[ignore]
async fn test_checkout_and_return_flow() {
    let client = Client::new();
    let id = unique_id("flow");

    create_book(&client, &id, 1).await;

    // Check out the only copy
    let response = client
        .patch(format!("{}/book/checkout?id={}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["quantity"], 0);

    // A second checkout is rejected
    let response = client
        .patch(format!("{}/book/checkout?id={}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "BookNotAvailable");

    // Returning the copy makes it available again
    let response = client
        .patch(format!("{}/book/return?id={}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["quantity"], 1);
}

#[tokio::test]
#[ignore]
async fn test_checkout_missing_id_param() {
    let client = Client::new();

    let response = client
        .patch(format!("{}/book/checkout", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "missing 'id' query parameter");
}

#[tokio::test]
#[ignore]
async fn test_checkout_unknown_book() {
    let client = Client::new();

    let response = client
        .patch(format!(
            "{}/book/checkout?id={}",
            BASE_URL,
            unique_id("missing")
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "NoSuchBook");
}
