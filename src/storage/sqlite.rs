//! SQLite implementation of [`StudentRepository`].

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::modules::students::model::{NewStudent, Student};
use crate::storage::error::{StorageError, StorageResult};
use crate::storage::traits::StudentRepository;

/// Student store backed by a SQLite pool.
///
/// Email uniqueness lives in the schema (`UNIQUE` on `email`), so concurrent
/// duplicate writes fail here even when a caller's pre-check raced.
#[derive(Debug, Clone)]
pub struct SqliteStudentRepository {
    pool: SqlitePool,
}

impl SqliteStudentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Maps a unique-constraint violation to [`StorageError::DuplicateEmail`],
/// anything else to a query error.
fn write_error(e: sqlx::Error, email: &str, context: &str) -> StorageError {
    if let sqlx::Error::Database(db_err) = &e
        && db_err.is_unique_violation()
    {
        return StorageError::DuplicateEmail {
            email: email.to_string(),
        };
    }
    StorageError::QueryError {
        message: format!("{context}: {e}"),
    }
}

#[async_trait]
impl StudentRepository for SqliteStudentRepository {
    async fn find_all(&self) -> StorageResult<Vec<Student>> {
        sqlx::query_as::<_, Student>(
            r#"
            SELECT id, first_name, last_name, email, phone_number, date_of_birth, grade, gpa
            FROM students
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::QueryError {
            message: format!("failed to list students: {e}"),
        })
    }

    async fn find_by_id(&self, id: i64) -> StorageResult<Option<Student>> {
        sqlx::query_as::<_, Student>(
            r#"
            SELECT id, first_name, last_name, email, phone_number, date_of_birth, grade, gpa
            FROM students
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::QueryError {
            message: format!("failed to fetch student {id}: {e}"),
        })
    }

    async fn find_by_email(&self, email: &str) -> StorageResult<Option<Student>> {
        sqlx::query_as::<_, Student>(
            r#"
            SELECT id, first_name, last_name, email, phone_number, date_of_birth, grade, gpa
            FROM students
            WHERE email = ?1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::QueryError {
            message: format!("failed to fetch student by email: {e}"),
        })
    }

    async fn exists_by_email(&self, email: &str) -> StorageResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM students WHERE email = ?1)")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StorageError::QueryError {
                message: format!("failed to check email existence: {e}"),
            })
    }

    async fn search_by_name(&self, fragment: &str) -> StorageResult<Vec<Student>> {
        sqlx::query_as::<_, Student>(
            r#"
            SELECT id, first_name, last_name, email, phone_number, date_of_birth, grade, gpa
            FROM students
            WHERE LOWER(first_name) LIKE '%' || LOWER(?1) || '%'
               OR LOWER(last_name) LIKE '%' || LOWER(?1) || '%'
            "#,
        )
        .bind(fragment)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::QueryError {
            message: format!("failed to search students by name: {e}"),
        })
    }

    async fn find_by_grade(&self, grade: &str) -> StorageResult<Vec<Student>> {
        sqlx::query_as::<_, Student>(
            r#"
            SELECT id, first_name, last_name, email, phone_number, date_of_birth, grade, gpa
            FROM students
            WHERE grade = ?1
            "#,
        )
        .bind(grade)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::QueryError {
            message: format!("failed to fetch students by grade: {e}"),
        })
    }

    async fn find_by_gpa_above(&self, threshold: f64) -> StorageResult<Vec<Student>> {
        sqlx::query_as::<_, Student>(
            r#"
            SELECT id, first_name, last_name, email, phone_number, date_of_birth, grade, gpa
            FROM students
            WHERE gpa > ?1
            "#,
        )
        .bind(threshold)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::QueryError {
            message: format!("failed to fetch students by gpa: {e}"),
        })
    }

    async fn insert(&self, new: NewStudent) -> StorageResult<Student> {
        sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (first_name, last_name, email, phone_number, date_of_birth, grade, gpa)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            RETURNING id, first_name, last_name, email, phone_number, date_of_birth, grade, gpa
            "#,
        )
        .bind(&new.first_name)
        .bind(&new.last_name)
        .bind(&new.email)
        .bind(&new.phone_number)
        .bind(new.date_of_birth)
        .bind(&new.grade)
        .bind(new.gpa)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, &new.email, "failed to insert student"))
    }

    async fn save(&self, student: &Student) -> StorageResult<()> {
        sqlx::query(
            r#"
            INSERT INTO students (id, first_name, last_name, email, phone_number, date_of_birth, grade, gpa)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ON CONFLICT(id) DO UPDATE SET
                first_name = excluded.first_name,
                last_name = excluded.last_name,
                email = excluded.email,
                phone_number = excluded.phone_number,
                date_of_birth = excluded.date_of_birth,
                grade = excluded.grade,
                gpa = excluded.gpa
            "#,
        )
        .bind(student.id)
        .bind(&student.first_name)
        .bind(&student.last_name)
        .bind(&student.email)
        .bind(&student.phone_number)
        .bind(student.date_of_birth)
        .bind(&student.grade)
        .bind(student.gpa)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, &student.email, "failed to save student"))?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> StorageResult<bool> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::QueryError {
                message: format!("failed to delete student {id}: {e}"),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
