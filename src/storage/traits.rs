//! Storage trait the service layer programs against.

use async_trait::async_trait;

use crate::modules::students::model::{NewStudent, Student};
use crate::storage::error::StorageResult;

/// Persistence interface for student records.
///
/// Implementations must be thread-safe and async. Everything above this trait
/// is engine-agnostic: handlers and services never see a pool or a connection,
/// only this interface.
#[async_trait]
pub trait StudentRepository: Send + Sync + 'static {
    /// Returns every stored student in the store's natural order.
    async fn find_all(&self) -> StorageResult<Vec<Student>>;

    /// Looks a student up by id.
    async fn find_by_id(&self, id: i64) -> StorageResult<Option<Student>>;

    /// Looks a student up by exact email.
    async fn find_by_email(&self, email: &str) -> StorageResult<Option<Student>>;

    /// Returns whether any student carries the given email.
    async fn exists_by_email(&self, email: &str) -> StorageResult<bool>;

    /// Case-insensitive substring match against first or last name.
    ///
    /// An empty fragment matches every student.
    async fn search_by_name(&self, fragment: &str) -> StorageResult<Vec<Student>>;

    /// Students whose grade label matches exactly.
    async fn find_by_grade(&self, grade: &str) -> StorageResult<Vec<Student>>;

    /// Students with a GPA strictly greater than the threshold.
    async fn find_by_gpa_above(&self, threshold: f64) -> StorageResult<Vec<Student>>;

    /// Inserts a new student and returns it with its assigned id.
    ///
    /// Ids are assigned by the store and never reused, even after deletes.
    async fn insert(&self, new: NewStudent) -> StorageResult<Student>;

    /// Writes a student back under its id, inserting if the row is gone.
    async fn save(&self, student: &Student) -> StorageResult<()>;

    /// Deletes by id and reports whether a row was actually removed.
    async fn delete(&self, id: i64) -> StorageResult<bool>;
}
