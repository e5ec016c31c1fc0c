#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

//! Escola - A course and student enrollment service
//!
//! Escola keeps courses, students and the enrollments between them in a
//! SQLite database and exposes them as a JSON REST API. It can be used as
//! both a command-line application and a library.
//!
//! # Feature Flags
//!
//! | Feature | Description | Key Dependencies |
//! |---------|-------------|------------------|
//! | (none) | Database, store and directory operations | `rusqlite` |
//! | `server` | HTTP API | `axum`, `tokio`, `tower-http` |
//! | `cli` | CLI binary with server support | All above + `clap` |
//!
//! # Architecture
//!
//! - **[`database`]**: SQLite connection, schema and repositories
//!   - `core`: connection management and schema definitions
//!   - `school`: courses, students and enrollments tables
//! - **[`store`]**: The [`EnrollmentStore`] trait and its SQLite implementation
//! - **[`directory`]**: Validation, uniqueness rules and the student view
//! - **[`server`]**: Axum routes over the directory (requires `server`)
//! - **[`config`]**: Configuration management
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use escola::{CourseInput, EnrollmentDirectory, EnrollmentInput, SqliteStore, StudentInput};
//! use std::sync::Arc;
//!
//! let store = Arc::new(SqliteStore::open_in_dir("~/.escola")?);
//! let directory = EnrollmentDirectory::new(store);
//!
//! let course = directory.create_course(&CourseInput::new("BD", "Banco de dados"))?;
//! let student = directory.create_student(&StudentInput::new("Carlos", "carlos@x.com"))?;
//!
//! let view = directory.enroll(student.id, &EnrollmentInput::new(course.id))?;
//! assert!(view.courses.contains("BD"));
//! ```

pub mod config;
pub mod database;
pub mod directory;
pub mod store;

#[cfg(feature = "server")]
pub mod server;

// =============================================================================
// Configuration
// =============================================================================

pub use config::SchoolConfig;

// =============================================================================
// Database
// =============================================================================

pub use database::{
    CourseRecord, DatabaseConn, SchemaDefinitions, SchemaManager, SchemaStatus, SchoolDatabase,
    StudentRecord, SCHEMA_VERSION,
};

// =============================================================================
// Store and Directory
// =============================================================================

pub use store::{EnrollmentStore, SqliteStore};

pub use directory::{
    CourseInput, DirectoryError, DirectoryOptions, DirectoryResult, EnrolledCourses,
    EnrollmentDirectory, EnrollmentInput, StudentInput, StudentView, NOT_ENROLLED_SENTINEL,
};

// =============================================================================
// Server
// =============================================================================

#[cfg(feature = "server")]
pub use server::{create_axum_router, start_server, ServerConfig, ServerState};
