//! Member model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// Library member (student) as stored in the `members` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Member {
    pub id: i64,
    pub name: String,
    /// Cohort label, e.g. `9A`
    pub class: String,
    /// Externally visible member code, unique and immutable
    pub member_id: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub status: String,
}

/// Member list query
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct MemberQuery {
    /// Exact status label, e.g. `Aktif`
    pub status: Option<String>,
}
