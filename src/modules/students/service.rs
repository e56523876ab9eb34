use std::sync::Arc;

use thiserror::Error;
use tracing::instrument;

use crate::modules::students::model::{
    CreateStudentDto, NewStudent, PatchStudentDto, Student, UpdateStudentDto,
};
use crate::storage::{StorageError, StudentRepository};

/// Failure kinds for student operations.
///
/// Handlers translate these into HTTP responses; the messages are the
/// response bodies, so they are phrased for API consumers.
#[derive(Debug, Error)]
pub enum StudentError {
    #[error("Student not found with id: {0}")]
    NotFound(i64),

    #[error("Student with email {0} already exists")]
    EmailTaken(String),

    #[error(transparent)]
    Storage(StorageError),
}

impl From<StorageError> for StudentError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::DuplicateEmail { email } => StudentError::EmailTaken(email),
            other => StudentError::Storage(other),
        }
    }
}

/// Business logic for student records, on top of any [`StudentRepository`].
#[derive(Clone)]
pub struct StudentService {
    repo: Arc<dyn StudentRepository>,
}

impl StudentService {
    pub fn new(repo: Arc<dyn StudentRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn get_all_students(&self) -> Result<Vec<Student>, StudentError> {
        Ok(self.repo.find_all().await?)
    }

    #[instrument(skip(self))]
    pub async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>, StudentError> {
        Ok(self.repo.find_by_id(id).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_student_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Student>, StudentError> {
        Ok(self.repo.find_by_email(email).await?)
    }

    #[instrument(skip(self, dto))]
    pub async fn create_student(&self, dto: CreateStudentDto) -> Result<Student, StudentError> {
        if self.repo.exists_by_email(&dto.email).await? {
            return Err(StudentError::EmailTaken(dto.email));
        }

        // The UNIQUE constraint backstops the check above, so a racing
        // duplicate insert still comes back as EmailTaken.
        let student = self.repo.insert(NewStudent::from(dto)).await?;
        Ok(student)
    }

    #[instrument(skip(self, dto))]
    pub async fn update_student(
        &self,
        id: i64,
        dto: UpdateStudentDto,
    ) -> Result<Student, StudentError> {
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(StudentError::NotFound(id))?;

        if dto.email != existing.email && self.repo.exists_by_email(&dto.email).await? {
            return Err(StudentError::EmailTaken(dto.email));
        }

        let updated = Student {
            id: existing.id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone_number: dto.phone_number,
            date_of_birth: dto.date_of_birth,
            grade: dto.grade,
            gpa: dto.gpa,
        };
        self.repo.save(&updated).await?;

        Ok(updated)
    }

    #[instrument(skip(self, dto))]
    pub async fn patch_student(
        &self,
        id: i64,
        dto: PatchStudentDto,
    ) -> Result<Student, StudentError> {
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(StudentError::NotFound(id))?;

        // Absent fields keep their stored values. Email uniqueness on patch
        // is enforced by the schema constraint alone.
        let updated = Student {
            id: existing.id,
            first_name: dto.first_name.unwrap_or(existing.first_name),
            last_name: dto.last_name.unwrap_or(existing.last_name),
            email: dto.email.unwrap_or(existing.email),
            phone_number: dto.phone_number.or(existing.phone_number),
            date_of_birth: dto.date_of_birth.or(existing.date_of_birth),
            grade: dto.grade.unwrap_or(existing.grade),
            gpa: dto.gpa.unwrap_or(existing.gpa),
        };
        self.repo.save(&updated).await?;

        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_student(&self, id: i64) -> Result<(), StudentError> {
        if !self.repo.delete(id).await? {
            return Err(StudentError::NotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn search_students_by_name(
        &self,
        fragment: &str,
    ) -> Result<Vec<Student>, StudentError> {
        Ok(self.repo.search_by_name(fragment).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_students_by_grade(&self, grade: &str) -> Result<Vec<Student>, StudentError> {
        Ok(self.repo.find_by_grade(grade).await?)
    }

    #[instrument(skip(self))]
    pub async fn get_students_with_gpa_above(
        &self,
        gpa: f64,
    ) -> Result<Vec<Student>, StudentError> {
        Ok(self.repo.find_by_gpa_above(gpa).await?)
    }

    #[instrument(skip(self))]
    pub async fn count_students(&self) -> Result<i64, StudentError> {
        // Derived from the full listing so it can never disagree with it.
        Ok(self.repo.find_all().await?.len() as i64)
    }
}
