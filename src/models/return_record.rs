//! Return model: the closing event of a borrow

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Return joined with its borrow, member and book
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ReturnView {
    pub id: i64,
    pub borrow_id: i64,
    pub return_date: NaiveDate,
    pub fine: i64,
    pub reason: Option<String>,
    #[serde(rename = "memberName")]
    pub member_name: String,
    #[serde(rename = "bookTitle")]
    pub book_title: String,
    #[serde(rename = "borrowDate")]
    pub borrow_date: NaiveDate,
}

/// Create return request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateReturn {
    pub borrow_id: Option<i64>,
    pub return_date: Option<NaiveDate>,
    #[serde(default)]
    pub fine: Option<i64>,
    #[serde(default)]
    pub reason: Option<String>,
}
