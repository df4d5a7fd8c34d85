//! Perpustakaan Library Management System
//!
//! A REST JSON backend for a school library: book catalog, members,
//! borrow/return records and dashboard statistics over an embedded SQLite store.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}
