//! Status labels stored in the `members.status` and `borrows.status` columns.
//!
//! The columns are free text; these enums name the values the server itself
//! writes and counts. Filters on list endpoints still match raw strings.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// MemberStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MemberStatus {
    #[serde(rename = "Aktif")]
    Active,
}

impl MemberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "Aktif",
        }
    }
}

// ---------------------------------------------------------------------------
// BorrowStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum BorrowStatus {
    #[serde(rename = "Dipinjam")]
    Borrowed,
    #[serde(rename = "Dikembalikan")]
    Returned,
}

impl BorrowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BorrowStatus::Borrowed => "Dipinjam",
            BorrowStatus::Returned => "Dikembalikan",
        }
    }

    /// Parse a stored label; unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Dipinjam" => Some(BorrowStatus::Borrowed),
            "Dikembalikan" => Some(BorrowStatus::Returned),
            _ => None,
        }
    }
}
