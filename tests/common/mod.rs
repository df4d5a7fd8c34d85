//! Shared fixtures: a freshly seeded in-memory store per test.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use sqlx::sqlite::SqlitePoolOptions;

use perpustakaan_server::{
    api,
    models::{CreateBook, CreateBorrow},
    repository::{self, schema, Repository},
    services::Services,
    AppState,
};

/// In-memory SQLite lives as long as its single connection, so the pool
/// must never recycle it.
pub async fn seeded_repository() -> Repository {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(repository::connect_options("sqlite::memory:").expect("valid url"))
        .await
        .expect("Failed to open in-memory database");

    schema::init(&pool).await.expect("Failed to bootstrap schema");
    Repository::new(pool)
}

pub async fn seeded_services() -> Services {
    Services::new(seeded_repository().await)
}

pub async fn seeded_router() -> axum::Router {
    let state = AppState {
        services: Arc::new(seeded_services().await),
    };
    api::router(state)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn complete_book() -> CreateBook {
    CreateBook {
        title: Some("X".to_string()),
        author: Some("Y".to_string()),
        publisher: Some("Z".to_string()),
        year: Some(2023),
        category: Some("C".to_string()),
        stock: Some(3),
    }
}

pub fn borrow_of(member_id: i64, book_id: i64) -> CreateBorrow {
    CreateBorrow {
        member_id: Some(member_id),
        book_id: Some(book_id),
        borrow_date: Some(date(2024, 3, 1)),
        return_date: Some(date(2024, 3, 8)),
    }
}
