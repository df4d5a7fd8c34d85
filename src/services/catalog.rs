//! Catalog management service

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookFields, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List books, filtered by a search term when one is given
    pub async fn list_books(&self, search: Option<&str>) -> AppResult<Vec<Book>> {
        self.repository.books.list(search).await
    }

    /// Get book by ID
    pub async fn get_book(&self, id: i64) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Create a new book. Every field must be present.
    pub async fn add_book(&self, book: CreateBook) -> AppResult<i64> {
        let fields = BookFields::try_from(book)
            .map_err(|_| AppError::Validation("Missing required fields".to_string()))?;

        let id = self.repository.books.create(&fields).await?;
        tracing::info!("Catalog: created book id={} title={:?}", id, fields.title);
        Ok(id)
    }

    /// Overwrite a book. Unknown ids are not an error.
    pub async fn update_book(&self, id: i64, book: UpdateBook) -> AppResult<()> {
        let affected = self.repository.books.update(id, &BookFields::from(book)).await?;
        if affected == 0 {
            tracing::debug!("Catalog: update of unknown book id={} ignored", id);
        }
        Ok(())
    }

    /// Delete a book. Unknown ids are not an error.
    pub async fn delete_book(&self, id: i64) -> AppResult<()> {
        let affected = self.repository.books.delete(id).await?;
        tracing::info!("Catalog: deleted book id={} ({} row(s))", id, affected);
        Ok(())
    }
}
