use crate::modules::students::controller::{
    create_student, delete_student, get_student, get_student_by_email, get_student_count,
    get_students, get_students_by_grade, get_students_with_gpa_above, patch_student,
    search_students, update_student,
};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_students_router() -> Router<AppState> {
    // Static segments (count, search, email, ...) must not be swallowed by
    // the {id} capture; axum gives static routes precedence.
    Router::new()
        .route("/", get(get_students).post(create_student))
        .route("/count", get(get_student_count))
        .route("/search", get(search_students))
        .route("/email/{email}", get(get_student_by_email))
        .route("/grade/{grade}", get(get_students_by_grade))
        .route("/gpa-above/{gpa}", get(get_students_with_gpa_above))
        .route(
            "/{id}",
            get(get_student)
                .put(update_student)
                .patch(patch_student)
                .delete(delete_student),
        )
}
