//! Books repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, BookFields},
        stats::PopularBook,
    },
};

const POPULAR_LIMIT: i64 = 5;

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Sqlite>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// All books, or those whose title, author or category contains `term`.
    /// SQLite LIKE folds ASCII case.
    pub async fn list(&self, term: Option<&str>) -> AppResult<Vec<Book>> {
        let books = match term.filter(|t| !t.is_empty()) {
            Some(term) => {
                let pattern = format!("%{}%", term);
                sqlx::query_as::<_, Book>(
                    r#"
                    SELECT id, title, author, publisher, year, category, stock
                    FROM books
                    WHERE title LIKE ? OR author LIKE ? OR category LIKE ?
                    ORDER BY id
                    "#,
                )
                .bind(&pattern)
                .bind(&pattern)
                .bind(&pattern)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Book>(
                    "SELECT id, title, author, publisher, year, category, stock FROM books ORDER BY id",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(books)
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            "SELECT id, title, author, publisher, year, category, stock FROM books WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Insert a book and return its new id
    pub async fn create(&self, book: &BookFields) -> AppResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO books (title, author, publisher, year, category, stock)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.publisher)
        .bind(book.year)
        .bind(&book.category)
        .bind(book.stock)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Overwrite every column of a book. Returns the number of rows touched.
    pub async fn update(&self, id: i64, book: &BookFields) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE books SET
                title = ?,
                author = ?,
                publisher = ?,
                year = ?,
                category = ?,
                stock = ?
            WHERE id = ?
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.publisher)
        .bind(book.year)
        .bind(&book.category)
        .bind(book.stock)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete a book. Borrows pointing at it are left untouched.
    pub async fn delete(&self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Add `delta` to a book's stock
    pub async fn adjust_stock(&self, id: i64, delta: i64) -> AppResult<()> {
        sqlx::query("UPDATE books SET stock = stock + ? WHERE id = ?")
            .bind(delta)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Count all books
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Most borrowed books, ties broken by id
    pub async fn popular(&self) -> AppResult<Vec<PopularBook>> {
        let books = sqlx::query_as::<_, PopularBook>(
            r#"
            SELECT books.id, books.title, books.author, books.category,
                   COUNT(borrows.id) AS borrow_count
            FROM books
            LEFT JOIN borrows ON books.id = borrows.book_id
            GROUP BY books.id
            ORDER BY borrow_count DESC, books.id ASC
            LIMIT ?
            "#,
        )
        .bind(POPULAR_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }
}
