use std::sync::Arc;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::modules::students::service::StudentService;
use crate::storage::SqliteStudentRepository;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub students: StudentService,
    pub cors_config: CorsConfig,
}

/// Connects the store, wires the service over it, and loads config.
pub async fn init_app_state() -> AppState {
    let pool = init_db_pool().await;
    let repo = Arc::new(SqliteStudentRepository::new(pool));

    AppState {
        students: StudentService::new(repo),
        cors_config: CorsConfig::from_env(),
    }
}
