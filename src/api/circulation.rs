//! Borrow and return endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        borrow::{BorrowQuery, BorrowView, CreateBorrow},
        return_record::{CreateReturn, ReturnView},
    },
    AppState,
};

use super::{json::AppJson, CreatedResponse};

/// List borrows with member and book details
#[utoipa::path(
    get,
    path = "/borrows",
    tag = "circulation",
    params(BorrowQuery),
    responses(
        (status = 200, description = "List of borrows", body = Vec<BorrowView>)
    )
)]
pub async fn list_borrows(
    State(state): State<AppState>,
    Query(query): Query<BorrowQuery>,
) -> AppResult<Json<Vec<BorrowView>>> {
    let borrows = state
        .services
        .circulation
        .list_borrows(query.status.as_deref())
        .await?;
    Ok(Json(borrows))
}

/// Lend a book to a member
#[utoipa::path(
    post,
    path = "/borrows",
    tag = "circulation",
    request_body = CreateBorrow,
    responses(
        (status = 201, description = "Borrow created", body = CreatedResponse),
        (status = 400, description = "Missing required fields", body = crate::error::ErrorResponse),
        (status = 404, description = "Member or book not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Book out of stock", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_borrow(
    State(state): State<AppState>,
    AppJson(borrow): AppJson<CreateBorrow>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let id = state.services.circulation.create_borrow(borrow).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// List returns with member, book and borrow date
#[utoipa::path(
    get,
    path = "/returns",
    tag = "circulation",
    responses(
        (status = 200, description = "List of returns", body = Vec<ReturnView>)
    )
)]
pub async fn list_returns(State(state): State<AppState>) -> AppResult<Json<Vec<ReturnView>>> {
    let returns = state.services.circulation.list_returns().await?;
    Ok(Json(returns))
}

/// Record the return of a borrowed book
#[utoipa::path(
    post,
    path = "/returns",
    tag = "circulation",
    request_body = CreateReturn,
    responses(
        (status = 201, description = "Return recorded", body = CreatedResponse),
        (status = 400, description = "Missing required fields", body = crate::error::ErrorResponse),
        (status = 404, description = "Borrow not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Borrow already returned", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_return(
    State(state): State<AppState>,
    AppJson(ret): AppJson<CreateReturn>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let id = state.services.circulation.create_return(ret).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}
