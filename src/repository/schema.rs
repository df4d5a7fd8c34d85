//! Schema bootstrap: create tables if absent, seed sample rows if empty.
//!
//! Safe to run on every startup. Foreign keys are declared for documentation
//! only; connections built with [`super::connect_options`] keep the
//! `foreign_keys` pragma off, so deleting a referenced book leaves dangling
//! borrows behind.

use sqlx::{Pool, Sqlite};

use crate::error::AppResult;

const CREATE_TABLES: [&str; 4] = [
    r#"
    CREATE TABLE IF NOT EXISTS books (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        author TEXT NOT NULL,
        publisher TEXT NOT NULL,
        year INTEGER NOT NULL,
        category TEXT NOT NULL,
        stock INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS members (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        class TEXT NOT NULL,
        member_id TEXT NOT NULL UNIQUE,
        phone TEXT,
        email TEXT,
        status TEXT NOT NULL DEFAULT 'Aktif'
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS borrows (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        member_id INTEGER NOT NULL,
        book_id INTEGER NOT NULL,
        borrow_date DATE NOT NULL,
        return_date DATE NOT NULL,
        status TEXT NOT NULL DEFAULT 'Dipinjam',
        FOREIGN KEY (member_id) REFERENCES members(id),
        FOREIGN KEY (book_id) REFERENCES books(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS returns (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        borrow_id INTEGER NOT NULL,
        return_date DATE NOT NULL,
        fine INTEGER NOT NULL DEFAULT 0,
        reason TEXT,
        FOREIGN KEY (borrow_id) REFERENCES borrows(id)
    )
    "#,
];

/// (title, author, publisher, year, category, stock)
const SAMPLE_BOOKS: [(&str, &str, &str, i64, &str, i64); 5] = [
    ("Pemrograman JavaScript Modern", "Budi Raharjo", "Informatika", 2022, "Teknologi", 15),
    ("Fiqih Ibadah untuk Pemula", "Ust. Ahmad Syafi'i", "Pustaka Muslim", 2021, "Agama", 22),
    ("Matematika Kelas 9", "Dewi Sartika", "Erlangga", 2020, "Pelajaran", 18),
    ("Sejarah Peradaban Islam", "Prof. Dr. Hamka", "Pustaka Alvabet", 2019, "Sejarah", 12),
    ("Kumpulan Cerpen Islami", "Asma Nadia", "Republika", 2021, "Sastra", 20),
];

/// (name, class, member_id, phone, email)
const SAMPLE_MEMBERS: [(&str, &str, &str, &str, &str); 4] = [
    ("Ahmad Fauzi", "9A", "MTSN001", "081234567890", "ahmad@example.com"),
    ("Siti Rahayu", "8B", "MTSN002", "081298765432", "siti@example.com"),
    ("Budi Santoso", "9C", "MTSN003", "085678901234", "budi@example.com"),
    ("Dewi Anggraini", "8A", "MTSN004", "087812345678", "dewi@example.com"),
];

/// Create missing tables and seed empty ones.
pub async fn init(pool: &Pool<Sqlite>) -> AppResult<()> {
    for statement in CREATE_TABLES {
        sqlx::query(statement).execute(pool).await?;
    }

    let books: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
        .fetch_one(pool)
        .await?;
    if books == 0 {
        for (title, author, publisher, year, category, stock) in SAMPLE_BOOKS {
            sqlx::query(
                "INSERT INTO books (title, author, publisher, year, category, stock) VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(title)
            .bind(author)
            .bind(publisher)
            .bind(year)
            .bind(category)
            .bind(stock)
            .execute(pool)
            .await?;
        }
        tracing::info!("Seeded {} sample books", SAMPLE_BOOKS.len());
    }

    let members: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM members")
        .fetch_one(pool)
        .await?;
    if members == 0 {
        for (name, class, member_id, phone, email) in SAMPLE_MEMBERS {
            sqlx::query(
                "INSERT INTO members (name, class, member_id, phone, email) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(name)
            .bind(class)
            .bind(member_id)
            .bind(phone)
            .bind(email)
            .execute(pool)
            .await?;
        }
        tracing::info!("Seeded {} sample members", SAMPLE_MEMBERS.len());
    }

    Ok(())
}
