//! Member endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::member::{Member, MemberQuery},
    AppState,
};

/// List members, optionally filtered by status
#[utoipa::path(
    get,
    path = "/members",
    tag = "members",
    params(MemberQuery),
    responses(
        (status = 200, description = "List of members", body = Vec<Member>)
    )
)]
pub async fn list_members(
    State(state): State<AppState>,
    Query(query): Query<MemberQuery>,
) -> AppResult<Json<Vec<Member>>> {
    let members = state
        .services
        .members
        .list_members(query.status.as_deref())
        .await?;
    Ok(Json(members))
}
