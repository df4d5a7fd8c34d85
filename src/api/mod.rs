//! API handlers for Perpustakaan REST endpoints

pub mod books;
pub mod circulation;
pub mod health;
pub mod json;
pub mod members;
pub mod openapi;
pub mod stats;

use axum::{
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::ToSchema;

use crate::AppState;

/// Body returned when a resource is created
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    /// Id of the new row
    pub id: i64,
}

/// Body returned by update and delete
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // The dashboard client is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Dashboard
        .route("/dashboard", get(stats::dashboard))
        .route("/popular-books", get(stats::popular_books))
        // Books (catalog)
        .route("/books", get(books::list_books).post(books::add_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        // Members
        .route("/members", get(members::list_members))
        // Circulation
        .route("/borrows", get(circulation::list_borrows).post(circulation::create_borrow))
        .route("/returns", get(circulation::list_returns).post(circulation::create_return))
        .with_state(state);

    Router::new()
        .merge(api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
