//! Circulation service: borrow and return lifecycle.
//!
//! Creating a borrow and creating a return each run several statements with no
//! enclosing transaction. A failure between them leaves the store half updated
//! (for example a return row whose borrow is still `Dipinjam`).
//!
//! Two rules are stricter than a plain ledger: lending a book whose stock is
//! zero or below is rejected ("Book out of stock"), and so is returning a borrow
//! that is already `Dikembalikan` ("Borrow already returned"). Both surface as
//! `AppError::BusinessRule`, i.e. 422.

use crate::{
    error::{AppError, AppResult},
    models::{
        borrow::{BorrowView, CreateBorrow},
        enums::BorrowStatus,
        return_record::{CreateReturn, ReturnView},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CirculationService {
    repository: Repository,
}

impl CirculationService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List borrows with member and book details, optionally by exact status
    pub async fn list_borrows(&self, status: Option<&str>) -> AppResult<Vec<BorrowView>> {
        self.repository.borrows.list(status).await
    }

    /// List returns with member, book and original borrow date
    pub async fn list_returns(&self) -> AppResult<Vec<ReturnView>> {
        self.repository.returns.list().await
    }

    /// Open a borrow and take one copy off the shelf
    pub async fn create_borrow(&self, borrow: CreateBorrow) -> AppResult<i64> {
        let (Some(member_id), Some(book_id), Some(borrow_date), Some(return_date)) = (
            borrow.member_id,
            borrow.book_id,
            borrow.borrow_date,
            borrow.return_date,
        ) else {
            return Err(AppError::Validation("Missing required fields".to_string()));
        };

        self.repository.members.get_by_id(member_id).await?;
        let book = self.repository.books.get_by_id(book_id).await?;
        if book.stock <= 0 {
            return Err(AppError::BusinessRule("Book out of stock".to_string()));
        }

        let id = self
            .repository
            .borrows
            .create(member_id, book_id, borrow_date, return_date)
            .await?;
        self.repository.books.adjust_stock(book_id, -1).await?;

        tracing::info!(
            "Circulation: borrow id={} member_id={} book_id={} due {}",
            id, member_id, book_id, return_date
        );
        Ok(id)
    }

    /// Record a return, close its borrow and put the copy back on the shelf
    pub async fn create_return(&self, ret: CreateReturn) -> AppResult<i64> {
        let (Some(borrow_id), Some(return_date)) = (ret.borrow_id, ret.return_date) else {
            return Err(AppError::Validation("Missing required fields".to_string()));
        };

        let borrow = self.repository.borrows.get_by_id(borrow_id).await?;
        if BorrowStatus::from_label(&borrow.status) == Some(BorrowStatus::Returned) {
            return Err(AppError::BusinessRule("Borrow already returned".to_string()));
        }

        let id = self
            .repository
            .returns
            .create(borrow_id, return_date, ret.fine.unwrap_or(0), ret.reason.as_deref())
            .await?;
        self.repository
            .borrows
            .set_status(borrow_id, BorrowStatus::Returned)
            .await?;
        self.repository.books.adjust_stock(borrow.book_id, 1).await?;

        tracing::info!(
            "Circulation: return id={} closes borrow id={} on {}",
            id, borrow_id, return_date
        );
        Ok(id)
    }
}
