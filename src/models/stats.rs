//! Dashboard and ranking aggregates

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Dashboard counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// Number of book rows
    pub total_books: i64,
    /// Members whose status is `Aktif`
    pub active_members: i64,
    /// Borrows whose status is `Dipinjam`
    pub active_borrows: i64,
}

/// Entry of the popular books ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PopularBook {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub category: String,
    #[serde(rename = "borrowCount")]
    pub borrow_count: i64,
}
