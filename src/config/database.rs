//! Database configuration and connection pool initialization.
//!
//! This module handles SQLite connection pool setup using SQLx. The database
//! URL is read from the `DATABASE_URL` environment variable and defaults to a
//! file store next to the binary, created on first start.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: SQLite connection string, e.g. `sqlite://students.db?mode=rwc`
//!   or `sqlite::memory:` for an ephemeral store
//!
//! # Migrations
//!
//! Migrations embedded from the `migrations/` directory run before the pool
//! is handed out, so the schema (including the UNIQUE constraint on student
//! emails) is in place by the time the first request arrives.
//!
//! # Panics
//!
//! The [`init_db_pool`] function will panic if:
//!
//! - The database cannot be opened or created
//! - A migration fails to apply

use sqlx::SqlitePool;
use std::env;

/// Initializes the SQLite connection pool and applies pending migrations.
///
/// This function should be called once during application startup. The
/// returned pool is cheaply cloneable and is shared through the app state.
///
/// # Panics
///
/// Panics if:
/// - Connection to the database fails
/// - Migrations fail to apply
pub async fn init_db_pool() -> SqlitePool {
    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://students.db?mode=rwc".to_string());

    let pool = SqlitePool::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    pool
}
