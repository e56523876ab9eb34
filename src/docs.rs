use utoipa::OpenApi;

use crate::modules::students::model::{
    CreateStudentDto, PatchStudentDto, Student, UpdateStudentDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::get_student_by_email,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::patch_student,
        crate::modules::students::controller::delete_student,
        crate::modules::students::controller::search_students,
        crate::modules::students::controller::get_students_by_grade,
        crate::modules::students::controller::get_students_with_gpa_above,
        crate::modules::students::controller::get_student_count,
    ),
    components(
        schemas(
            Student,
            CreateStudentDto,
            UpdateStudentDto,
            PatchStudentDto,
        )
    ),
    tags(
        (name = "Students", description = "Student record management endpoints")
    ),
    info(
        title = "Rollbook API",
        version = "0.1.0",
        description = "A REST API for managing student records, built with Rust, Axum, and SQLite.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;
