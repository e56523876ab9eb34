use serde_json::{Value, json};
use sqlx::SqlitePool;
use std::sync::Arc;
use uuid::Uuid;

use rollbook::config::cors::CorsConfig;
use rollbook::modules::students::service::StudentService;
use rollbook::state::AppState;
use rollbook::storage::SqliteStudentRepository;

/// Builds the full application router over the given test pool.
#[allow(dead_code)]
pub fn setup_test_app(pool: SqlitePool) -> axum::Router {
    let repo = Arc::new(SqliteStudentRepository::new(pool));
    let state = AppState {
        students: StudentService::new(repo),
        cors_config: CorsConfig::from_env(),
    };
    rollbook::router::init_router(state)
}

/// A service wired directly over the pool, bypassing HTTP.
#[allow(dead_code)]
pub fn setup_service(pool: SqlitePool) -> StudentService {
    StudentService::new(Arc::new(SqliteStudentRepository::new(pool)))
}

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    format!("student-{}@example.com", Uuid::new_v4())
}

/// A complete, valid create/replace payload with the given identity fields.
#[allow(dead_code)]
pub fn student_payload(first: &str, last: &str, email: &str, grade: &str, gpa: f64) -> Value {
    json!({
        "firstName": first,
        "lastName": last,
        "email": email,
        "phoneNumber": "555-867-5309",
        "dateOfBirth": "2008-04-12",
        "grade": grade,
        "gpa": gpa
    })
}
