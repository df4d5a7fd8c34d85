//! Book (catalog entry) model and request payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// Book row as stored in the `books` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub year: i64,
    pub category: String,
    /// Copies on the shelf; not enforced to be non-negative
    pub stock: i64,
}

/// Book list query
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct BookQuery {
    /// Case-insensitive substring matched against title, author or category
    pub search: Option<String>,
}

/// Create book request. Every field is required.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub year: Option<i64>,
    pub category: Option<String>,
    pub stock: Option<i64>,
}

/// Update book request.
///
/// Updates overwrite the whole row: a field left out of the request is
/// written as an empty string or zero, never kept from the stored book.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub year: Option<i64>,
    pub category: Option<String>,
    pub stock: Option<i64>,
}

/// Column values for an insert or overwrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub year: i64,
    pub category: String,
    pub stock: i64,
}

impl From<UpdateBook> for BookFields {
    fn from(b: UpdateBook) -> Self {
        Self {
            title: b.title.unwrap_or_default(),
            author: b.author.unwrap_or_default(),
            publisher: b.publisher.unwrap_or_default(),
            year: b.year.unwrap_or(0),
            category: b.category.unwrap_or_default(),
            stock: b.stock.unwrap_or(0),
        }
    }
}

impl TryFrom<CreateBook> for BookFields {
    type Error = CreateBook;

    /// Succeeds only when every field is present; gives the request back otherwise.
    fn try_from(b: CreateBook) -> Result<Self, Self::Error> {
        match b {
            CreateBook {
                title: Some(title),
                author: Some(author),
                publisher: Some(publisher),
                year: Some(year),
                category: Some(category),
                stock: Some(stock),
            } => Ok(Self { title, author, publisher, year, category, stock }),
            other => Err(other),
        }
    }
}
