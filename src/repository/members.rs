//! Members repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::{enums::MemberStatus, member::Member},
};

#[derive(Clone)]
pub struct MembersRepository {
    pool: Pool<Sqlite>,
}

impl MembersRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List members, optionally restricted to one exact status label
    pub async fn list(&self, status: Option<&str>) -> AppResult<Vec<Member>> {
        let members = match status.filter(|s| !s.is_empty()) {
            Some(status) => {
                sqlx::query_as::<_, Member>(
                    r#"
                    SELECT id, name, class, member_id, phone, email, status
                    FROM members
                    WHERE status = ?
                    ORDER BY id
                    "#,
                )
                .bind(status)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Member>(
                    "SELECT id, name, class, member_id, phone, email, status FROM members ORDER BY id",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(members)
    }

    /// Get member by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Member> {
        sqlx::query_as::<_, Member>(
            "SELECT id, name, class, member_id, phone, email, status FROM members WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Member not found".to_string()))
    }

    /// Count members with the given status
    pub async fn count_by_status(&self, status: MemberStatus) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM members WHERE status = ?")
            .bind(status.as_str())
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
