//! Repository layer for database operations

pub mod books;
pub mod borrows;
pub mod members;
pub mod returns;
pub mod schema;

use std::str::FromStr;

use sqlx::{
    sqlite::SqliteConnectOptions,
    Pool, Sqlite,
};

/// Connection options for the store at `url`.
///
/// sqlx enables `PRAGMA foreign_keys` by default; it is turned off here so a
/// book can be deleted while borrows still reference it.
pub fn connect_options(url: &str) -> Result<SqliteConnectOptions, sqlx::Error> {
    Ok(SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(false))
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Sqlite>,
    pub books: books::BooksRepository,
    pub members: members::MembersRepository,
    pub borrows: borrows::BorrowsRepository,
    pub returns: returns::ReturnsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            books: books::BooksRepository::new(pool.clone()),
            members: members::MembersRepository::new(pool.clone()),
            borrows: borrows::BorrowsRepository::new(pool.clone()),
            returns: returns::ReturnsRepository::new(pool.clone()),
            pool,
        }
    }
}
