//! # Rollbook API
//!
//! A REST API built with Rust, Axum, and SQLite for managing student records:
//! create, look up, replace, patch and delete students, plus name search and
//! grade/GPA filters.
//!
//! ## Architecture
//!
//! The codebase follows a modular architecture inspired by NestJS:
//!
//! ```text
//! src/
//! ├── config/           # Configuration modules (database, CORS, server)
//! ├── modules/          # Feature modules
//! │   └── students/    # Student records
//! ├── storage/          # StudentRepository trait and SQLite implementation
//! └── utils/            # Shared utilities
//! ```
//!
//! The feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers (routes)
//! - `service.rs`: Business logic
//! - `model.rs`: Data models, DTOs, database structs
//! - `router.rs`: Axum router configuration
//!
//! Handlers talk to [`modules::students::service::StudentService`], which
//! holds a [`storage::StudentRepository`] trait object. Swapping the storage
//! engine means implementing that trait and changing one line of wiring in
//! [`state::init_app_state`].
//!
//! ## Quick Start
//!
//! ### Environment Variables
//!
//! ```bash
//! DATABASE_URL=sqlite://students.db?mode=rwc
//! HOST=0.0.0.0
//! PORT=3000
//! ALLOWED_ORIGINS=*
//! ```
//!
//! All of these are optional; the defaults above are used when unset.
//!
//! ### API Documentation
//!
//! When the server is running, API documentation is available at:
//!
//! - Swagger UI: `http://localhost:3000/swagger-ui`
//! - Scalar: `http://localhost:3000/scalar`
//!
//! ## Modules
//!
//! - [`config`]: Application configuration
//! - [`docs`]: OpenAPI documentation setup
//! - [`logging`]: Request logging middleware
//! - [`modules`]: Feature modules (students)
//! - [`router`]: Main application router
//! - [`state`]: Shared application state
//! - [`storage`]: Persistence layer behind the repository trait
//! - [`utils`]: Shared utilities (errors)
//! - [`validator`]: Request validation utilities

pub mod config;
pub mod docs;
pub mod logging;
pub mod modules;
pub mod router;
pub mod state;
pub mod storage;
pub mod utils;
pub mod validator;
