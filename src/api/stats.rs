//! Dashboard and statistics endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::stats::{Dashboard, PopularBook},
    AppState,
};

/// Dashboard counters
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "stats",
    responses(
        (status = 200, description = "Dashboard counters", body = Dashboard)
    )
)]
pub async fn dashboard(State(state): State<AppState>) -> AppResult<Json<Dashboard>> {
    let dashboard = state.services.stats.dashboard().await?;
    Ok(Json(dashboard))
}

/// Five most borrowed books
#[utoipa::path(
    get,
    path = "/popular-books",
    tag = "stats",
    responses(
        (status = 200, description = "Most borrowed books", body = Vec<PopularBook>)
    )
)]
pub async fn popular_books(State(state): State<AppState>) -> AppResult<Json<Vec<PopularBook>>> {
    let books = state.services.stats.popular_books().await?;
    Ok(Json(books))
}
