//! Statistics service

use crate::{
    error::AppResult,
    models::{
        enums::{BorrowStatus, MemberStatus},
        stats::{Dashboard, PopularBook},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Dashboard counters, each from its own count query
    pub async fn dashboard(&self) -> AppResult<Dashboard> {
        let total_books = self.repository.books.count().await?;
        let active_members = self
            .repository
            .members
            .count_by_status(MemberStatus::Active)
            .await?;
        let active_borrows = self
            .repository
            .borrows
            .count_by_status(BorrowStatus::Borrowed)
            .await?;

        Ok(Dashboard {
            total_books,
            active_members,
            active_borrows,
        })
    }

    /// Check that the store answers
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.repository.pool).await?;
        Ok(())
    }

    /// Top five books by number of borrows, never-borrowed books counting zero
    pub async fn popular_books(&self) -> AppResult<Vec<PopularBook>> {
        self.repository.books.popular().await
    }
}
