use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::modules::students::model::{
    CreateStudentDto, PatchStudentDto, SearchParams, Student, UpdateStudentDto,
};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/students",
    responses(
        (status = 200, description = "List of all students", body = [Student]),
        (status = 500, description = "Internal server error", body = String)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_students(State(state): State<AppState>) -> Result<Json<Vec<Student>>, AppError> {
    let students = state.students.get_all_students().await?;
    Ok(Json(students))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(
        ("id" = i64, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student details", body = Student),
        (status = 404, description = "No student with this id")
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let student = state.students.get_student_by_id(id).await?;

    Ok(match student {
        Some(student) => Json(student).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    })
}

#[utoipa::path(
    get,
    path = "/api/students/email/{email}",
    params(
        ("email" = String, Path, description = "Student email address")
    ),
    responses(
        (status = 200, description = "Student details", body = Student),
        (status = 404, description = "No student with this email")
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Response, AppError> {
    let student = state.students.get_student_by_email(&email).await?;

    Ok(match student {
        Some(student) => Json(student).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    })
}

#[utoipa::path(
    post,
    path = "/api/students",
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Student created successfully", body = Student),
        (status = 400, description = "Validation failure or duplicate email", body = String)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateStudentDto>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    let student = state.students.create_student(dto).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

#[utoipa::path(
    put,
    path = "/api/students/{id}",
    params(
        ("id" = i64, Path, description = "Student ID")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Student updated successfully", body = Student),
        (status = 400, description = "Unknown id, validation failure or duplicate email", body = String)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateStudentDto>,
) -> Result<Json<Student>, AppError> {
    let student = state.students.update_student(id, dto).await?;
    Ok(Json(student))
}

#[utoipa::path(
    patch,
    path = "/api/students/{id}",
    params(
        ("id" = i64, Path, description = "Student ID")
    ),
    request_body = PatchStudentDto,
    responses(
        (status = 200, description = "Student updated successfully", body = Student),
        (status = 400, description = "Unknown id or validation failure", body = String)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn patch_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<PatchStudentDto>,
) -> Result<Json<Student>, AppError> {
    let student = state.students.patch_student(id, dto).await?;
    Ok(Json(student))
}

#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    params(
        ("id" = i64, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student deleted successfully", body = String),
        (status = 400, description = "Unknown id", body = String)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<&'static str, AppError> {
    state.students.delete_student(id).await?;
    Ok("Student deleted successfully")
}

#[utoipa::path(
    get,
    path = "/api/students/search",
    params(
        SearchParams
    ),
    responses(
        (status = 200, description = "Students whose first or last name contains the fragment", body = [Student]),
        (status = 400, description = "Missing name parameter", body = String)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn search_students(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Student>>, AppError> {
    let students = state.students.search_students_by_name(&params.name).await?;
    Ok(Json(students))
}

#[utoipa::path(
    get,
    path = "/api/students/grade/{grade}",
    params(
        ("grade" = String, Path, description = "Grade label, matched exactly")
    ),
    responses(
        (status = 200, description = "Students in the given grade", body = [Student])
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_students_by_grade(
    State(state): State<AppState>,
    Path(grade): Path<String>,
) -> Result<Json<Vec<Student>>, AppError> {
    let students = state.students.get_students_by_grade(&grade).await?;
    Ok(Json(students))
}

#[utoipa::path(
    get,
    path = "/api/students/gpa-above/{gpa}",
    params(
        ("gpa" = f64, Path, description = "Exclusive GPA lower bound")
    ),
    responses(
        (status = 200, description = "Students with a GPA strictly above the bound", body = [Student])
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_students_with_gpa_above(
    State(state): State<AppState>,
    Path(gpa): Path<f64>,
) -> Result<Json<Vec<Student>>, AppError> {
    let students = state.students.get_students_with_gpa_above(gpa).await?;
    Ok(Json(students))
}

#[utoipa::path(
    get,
    path = "/api/students/count",
    responses(
        (status = 200, description = "Total number of students", body = i64)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student_count(State(state): State<AppState>) -> Result<Json<i64>, AppError> {
    let count = state.students.count_students().await?;
    Ok(Json(count))
}
