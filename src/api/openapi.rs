//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, circulation, health, members, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Perpustakaan API",
        version = "0.1.0",
        description = "School Library Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        // Stats
        stats::dashboard,
        stats::popular_books,
        // Books
        books::list_books,
        books::get_book,
        books::add_book,
        books::update_book,
        books::delete_book,
        // Members
        members::list_members,
        // Circulation
        circulation::list_borrows,
        circulation::create_borrow,
        circulation::list_returns,
        circulation::create_return,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::BookQuery,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            // Members
            crate::models::member::Member,
            crate::models::member::MemberQuery,
            crate::models::enums::MemberStatus,
            // Circulation
            crate::models::borrow::Borrow,
            crate::models::borrow::BorrowView,
            crate::models::borrow::BorrowQuery,
            crate::models::borrow::CreateBorrow,
            crate::models::enums::BorrowStatus,
            crate::models::return_record::ReturnView,
            crate::models::return_record::CreateReturn,
            // Stats
            crate::models::stats::Dashboard,
            crate::models::stats::PopularBook,
            // Common
            crate::api::CreatedResponse,
            crate::api::SuccessResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "stats", description = "Dashboard and rankings"),
        (name = "books", description = "Catalog management"),
        (name = "members", description = "Library members"),
        (name = "circulation", description = "Borrows and returns")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
