//! Health check endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// `healthy` when the store answers, `degraded` otherwise
    pub status: String,
    /// Version of the service
    pub version: String,
}

/// Health check endpoint (pings the store)
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service status", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let status = match state.services.stats.ping().await {
        Ok(()) => "healthy",
        Err(e) => {
            tracing::warn!("Health check: store unavailable: {}", e);
            "degraded"
        }
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
