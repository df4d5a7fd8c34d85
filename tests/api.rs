//! Router-level tests: requests go through the full axum stack

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::seeded_router;

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    send_raw(app, method, uri, body.map(|body| body.to_string())).await
}

async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<String>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body)),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, value)
}

#[tokio::test]
async fn test_health_check() {
    let app = seeded_router().await;
    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_dashboard() {
    let app = seeded_router().await;
    let (status, body) = send(&app, "GET", "/dashboard", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"totalBooks": 5, "activeMembers": 4, "activeBorrows": 0}));
}

#[tokio::test]
async fn test_list_and_search_books() {
    let app = seeded_router().await;

    let (status, body) = send(&app, "GET", "/books", None).await;
    assert_eq!(status, StatusCode::OK);
    let books = body.as_array().expect("array");
    assert_eq!(books.len(), 5);
    assert_eq!(books[0]["title"], "Pemrograman JavaScript Modern");
    assert_eq!(books[0]["year"], 2022);
    assert_eq!(books[0]["stock"], 15);

    let (_, body) = send(&app, "GET", "/books?search=islam", None).await;
    let titles: Vec<&str> = body
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|b| b["title"].as_str())
        .collect();
    assert_eq!(titles, vec!["Sejarah Peradaban Islam", "Kumpulan Cerpen Islami"]);

    let (_, body) = send(&app, "GET", "/books?search=", None).await;
    assert_eq!(body.as_array().expect("array").len(), 5);
}

#[tokio::test]
async fn test_get_book_not_found() {
    let app = seeded_router().await;
    let (status, body) = send(&app, "GET", "/books/404", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Book not found"}));
}

#[tokio::test]
async fn test_create_update_and_delete_book() {
    let app = seeded_router().await;

    let (status, body) = send(
        &app,
        "POST",
        "/books",
        Some(json!({
            "title": "X",
            "author": "Y",
            "publisher": "Z",
            "year": 2023,
            "category": "C",
            "stock": 3
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 6}));

    let (status, body) = send(&app, "PUT", "/books/6", Some(json!({"title": "X2"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (_, body) = send(&app, "GET", "/books/6", None).await;
    assert_eq!(
        body,
        json!({
            "id": 6,
            "title": "X2",
            "author": "",
            "publisher": "",
            "year": 0,
            "category": "",
            "stock": 0
        })
    );

    let (status, body) = send(&app, "DELETE", "/books/6", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (status, _) = send(&app, "GET", "/books/6", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Unknown ids still report success
    let (status, body) = send(&app, "DELETE", "/books/6", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));
}

#[tokio::test]
async fn test_create_book_missing_field() {
    let app = seeded_router().await;
    let (status, body) = send(
        &app,
        "POST",
        "/books",
        Some(json!({
            "title": "X",
            "author": "Y",
            "publisher": "Z",
            "year": 2023,
            "category": "C"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Missing required fields"}));

    let (_, body) = send(&app, "GET", "/books", None).await;
    assert_eq!(body.as_array().expect("array").len(), 5);
}

#[tokio::test]
async fn test_create_book_wrong_field_type() {
    let app = seeded_router().await;
    let (status, body) = send(
        &app,
        "POST",
        "/books",
        Some(json!({
            "title": "X",
            "author": "Y",
            "publisher": "Z",
            "year": "2023",
            "category": "C",
            "stock": 3
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));

    let (_, body) = send(&app, "GET", "/books", None).await;
    assert_eq!(body.as_array().expect("array").len(), 5);
}

#[tokio::test]
async fn test_malformed_bodies_are_json_errors() {
    let app = seeded_router().await;

    for (uri, payload) in [
        ("/books", r#"{"title":"#),
        ("/books", "[]"),
        ("/books/1", r#"{"title": 7}"#),
        ("/borrows", r#"{"member_id": "one"}"#),
        ("/returns", "not json"),
    ] {
        let method = if uri == "/books/1" { "PUT" } else { "POST" };
        let (status, body) = send_raw(&app, method, uri, Some(payload.to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri} {payload}");
        assert!(body["error"].is_string(), "{method} {uri} {payload}");
    }

    let (_, body) = send(&app, "GET", "/books/1", None).await;
    assert_eq!(body["title"], "Pemrograman JavaScript Modern");
    let (_, body) = send(&app, "GET", "/borrows", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_delete_borrowed_book() {
    let app = seeded_router().await;

    let (status, _) = send(
        &app,
        "POST",
        "/borrows",
        Some(json!({
            "member_id": 1,
            "book_id": 1,
            "borrow_date": "2024-03-01",
            "return_date": "2024-03-08"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "DELETE", "/books/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (status, _) = send(&app, "GET", "/books/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The orphaned borrow drops out of the joined listing
    let (status, body) = send(&app, "GET", "/borrows", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (_, body) = send(&app, "GET", "/dashboard", None).await;
    assert_eq!(body["totalBooks"], 4);
}

#[tokio::test]
async fn test_list_members() {
    let app = seeded_router().await;

    let (status, body) = send(&app, "GET", "/members?status=Aktif", None).await;
    assert_eq!(status, StatusCode::OK);
    let members = body.as_array().expect("array");
    assert_eq!(members.len(), 4);
    assert_eq!(members[0]["name"], "Ahmad Fauzi");
    assert_eq!(members[0]["class"], "9A");
    assert_eq!(members[0]["member_id"], "MTSN001");
    assert_eq!(members[0]["status"], "Aktif");
}

#[tokio::test]
async fn test_borrow_and_return_flow() {
    let app = seeded_router().await;

    let (status, body) = send(
        &app,
        "POST",
        "/borrows",
        Some(json!({
            "member_id": 1,
            "book_id": 4,
            "borrow_date": "2024-03-01",
            "return_date": "2024-03-08"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let borrow_id = body["id"].as_i64().expect("No borrow ID");

    let (_, body) = send(&app, "GET", "/borrows?status=Dipinjam", None).await;
    let borrows = body.as_array().expect("array");
    assert_eq!(borrows.len(), 1);
    assert_eq!(borrows[0]["memberName"], "Ahmad Fauzi");
    assert_eq!(borrows[0]["memberClass"], "9A");
    assert_eq!(borrows[0]["bookTitle"], "Sejarah Peradaban Islam");
    assert_eq!(borrows[0]["borrow_date"], "2024-03-01");
    assert_eq!(borrows[0]["return_date"], "2024-03-08");

    let (_, body) = send(&app, "GET", "/dashboard", None).await;
    assert_eq!(body["activeBorrows"], 1);

    let (status, _) = send(
        &app,
        "POST",
        "/returns",
        Some(json!({"borrow_id": borrow_id, "return_date": "2024-03-09", "fine": 1000})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&app, "GET", "/returns", None).await;
    let returns = body.as_array().expect("array");
    assert_eq!(returns.len(), 1);
    assert_eq!(returns[0]["memberName"], "Ahmad Fauzi");
    assert_eq!(returns[0]["bookTitle"], "Sejarah Peradaban Islam");
    assert_eq!(returns[0]["borrowDate"], "2024-03-01");
    assert_eq!(returns[0]["fine"], 1000);

    let (_, body) = send(&app, "GET", "/dashboard", None).await;
    assert_eq!(body["activeBorrows"], 0);

    let (status, _) = send(
        &app,
        "POST",
        "/returns",
        Some(json!({"borrow_id": borrow_id, "return_date": "2024-03-09"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_popular_books() {
    let app = seeded_router().await;
    send(
        &app,
        "POST",
        "/borrows",
        Some(json!({
            "member_id": 2,
            "book_id": 3,
            "borrow_date": "2024-03-01",
            "return_date": "2024-03-08"
        })),
    )
    .await;

    let (status, body) = send(&app, "GET", "/popular-books", None).await;
    assert_eq!(status, StatusCode::OK);
    let books = body.as_array().expect("array");
    assert_eq!(books.len(), 5);
    assert_eq!(books[0]["id"], 3);
    assert_eq!(books[0]["borrowCount"], 1);
    assert_eq!(books[0]["category"], "Pelajaran");
    assert_eq!(books[1]["borrowCount"], 0);
}
