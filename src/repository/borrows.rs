//! Borrows repository for database operations

use chrono::NaiveDate;
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::{
        borrow::{Borrow, BorrowView},
        enums::BorrowStatus,
    },
};

#[derive(Clone)]
pub struct BorrowsRepository {
    pool: Pool<Sqlite>,
}

impl BorrowsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Borrows joined with member and book.
    ///
    /// Inner joins: a borrow whose member or book no longer exists is not listed.
    pub async fn list(&self, status: Option<&str>) -> AppResult<Vec<BorrowView>> {
        let mut query = String::from(
            r#"
            SELECT borrows.id, borrows.member_id, borrows.book_id,
                   borrows.borrow_date, borrows.return_date, borrows.status,
                   members.name AS member_name,
                   members.class AS member_class,
                   books.title AS book_title
            FROM borrows
            JOIN members ON borrows.member_id = members.id
            JOIN books ON borrows.book_id = books.id
            "#,
        );

        let status = status.filter(|s| !s.is_empty());
        if status.is_some() {
            query.push_str(" WHERE borrows.status = ?");
        }
        query.push_str(" ORDER BY borrows.id");

        let mut q = sqlx::query_as::<_, BorrowView>(&query);
        if let Some(status) = status {
            q = q.bind(status);
        }

        Ok(q.fetch_all(&self.pool).await?)
    }

    /// Get borrow by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Borrow> {
        sqlx::query_as::<_, Borrow>(
            r#"
            SELECT id, member_id, book_id, borrow_date, return_date, status
            FROM borrows WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Borrow not found".to_string()))
    }

    /// Insert an open borrow and return its id
    pub async fn create(
        &self,
        member_id: i64,
        book_id: i64,
        borrow_date: NaiveDate,
        return_date: NaiveDate,
    ) -> AppResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO borrows (member_id, book_id, borrow_date, return_date, status)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(member_id)
        .bind(book_id)
        .bind(borrow_date)
        .bind(return_date)
        .bind(BorrowStatus::Borrowed.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Set the status of a borrow
    pub async fn set_status(&self, id: i64, status: BorrowStatus) -> AppResult<()> {
        sqlx::query("UPDATE borrows SET status = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Count borrows with the given status
    pub async fn count_by_status(&self, status: BorrowStatus) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM borrows WHERE status = ?")
            .bind(status.as_str())
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
