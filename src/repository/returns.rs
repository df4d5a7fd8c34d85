//! Returns repository for database operations

use chrono::NaiveDate;
use sqlx::{Pool, Sqlite};

use crate::{error::AppResult, models::return_record::ReturnView};

#[derive(Clone)]
pub struct ReturnsRepository {
    pool: Pool<Sqlite>,
}

impl ReturnsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Returns joined with their borrow, member and book
    pub async fn list(&self) -> AppResult<Vec<ReturnView>> {
        let returns = sqlx::query_as::<_, ReturnView>(
            r#"
            SELECT returns.id, returns.borrow_id, returns.return_date,
                   returns.fine, returns.reason,
                   members.name AS member_name,
                   books.title AS book_title,
                   borrows.borrow_date AS borrow_date
            FROM returns
            JOIN borrows ON returns.borrow_id = borrows.id
            JOIN members ON borrows.member_id = members.id
            JOIN books ON borrows.book_id = books.id
            ORDER BY returns.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(returns)
    }

    /// Insert a return record and return its id
    pub async fn create(
        &self,
        borrow_id: i64,
        return_date: NaiveDate,
        fine: i64,
        reason: Option<&str>,
    ) -> AppResult<i64> {
        let result = sqlx::query(
            "INSERT INTO returns (borrow_id, return_date, fine, reason) VALUES (?, ?, ?, ?)",
        )
        .bind(borrow_id)
        .bind(return_date)
        .bind(fine)
        .bind(reason)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }
}
