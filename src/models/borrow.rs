//! Borrow (loan) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// Borrow row from the `borrows` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Borrow {
    pub id: i64,
    /// References `members.id` (the surrogate key, not the member code)
    pub member_id: i64,
    pub book_id: i64,
    pub borrow_date: NaiveDate,
    /// Due date; the actual return date lives in the return record
    pub return_date: NaiveDate,
    pub status: String,
}

/// Borrow joined with its member and book
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BorrowView {
    pub id: i64,
    pub member_id: i64,
    pub book_id: i64,
    pub borrow_date: NaiveDate,
    pub return_date: NaiveDate,
    pub status: String,
    #[serde(rename = "memberName")]
    pub member_name: String,
    #[serde(rename = "memberClass")]
    pub member_class: String,
    #[serde(rename = "bookTitle")]
    pub book_title: String,
}

/// Borrow list query
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct BorrowQuery {
    /// Exact status label, e.g. `Dipinjam`
    pub status: Option<String>,
}

/// Create borrow request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateBorrow {
    pub member_id: Option<i64>,
    pub book_id: Option<i64>,
    pub borrow_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
}
