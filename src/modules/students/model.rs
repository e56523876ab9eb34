//! Student domain models and DTOs.
//!
//! This module contains the student entity as stored in the database,
//! the request DTOs for the create/replace/patch endpoints, and the
//! query parameters for name search.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// A student record.
///
/// This struct represents the entity stored in the database. The id is
/// assigned by the store on insert and is never reused, even after the
/// record is deleted. Serialized field names are camelCase on the wire.
#[derive(Serialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub grade: String,
    pub gpa: f64,
}

/// A student that has not been persisted yet. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub grade: String,
    pub gpa: f64,
}

/// DTO for creating a new student.
#[derive(Deserialize, Debug, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 7, max = 20))]
    pub phone_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    #[validate(length(min = 1, max = 20))]
    pub grade: String,
    #[validate(range(min = 0.0, max = 4.0))]
    pub gpa: f64,
}

/// DTO for fully replacing an existing student.
///
/// Same shape as [`CreateStudentDto`]: every field of the stored record is
/// overwritten, including optional ones absent from the request. The id is
/// taken from the path and cannot be changed.
#[derive(Deserialize, Debug, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 7, max = 20))]
    pub phone_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    #[validate(length(min = 1, max = 20))]
    pub grade: String,
    #[validate(range(min = 0.0, max = 4.0))]
    pub gpa: f64,
}

/// DTO for partially updating a student.
///
/// All fields are optional; only provided fields will be updated.
#[derive(Deserialize, Debug, Default, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatchStudentDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 7, max = 20))]
    pub phone_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    #[validate(length(min = 1, max = 20))]
    pub grade: Option<String>,
    #[validate(range(min = 0.0, max = 4.0))]
    pub gpa: Option<f64>,
}

/// Query parameters for the student name search.
#[derive(Deserialize, Debug, IntoParams)]
pub struct SearchParams {
    /// Fragment matched case-insensitively against first or last name.
    pub name: String,
}

impl From<CreateStudentDto> for NewStudent {
    fn from(dto: CreateStudentDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone_number: dto.phone_number,
            date_of_birth: dto.date_of_birth,
            grade: dto.grade,
            gpa: dto.gpa,
        }
    }
}
