//! Persistence layer for student records.
//!
//! - [`traits`]: the [`StudentRepository`] interface
//! - [`sqlite`]: SQLite implementation over sqlx
//! - [`error`]: storage error types

pub mod error;
pub mod sqlite;
pub mod traits;

pub use error::{StorageError, StorageResult};
pub use sqlite::SqliteStudentRepository;
pub use traits::StudentRepository;
