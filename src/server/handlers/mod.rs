//! HTTP route handlers
//!
//! Handlers are organized by resource:
//!
//! - `courses` - `/cursos` CRUD
//! - `students` - `/alunos` CRUD with derived course lists
//! - `enrollments` - `/alunos/:id/matricular`, `/alunos/:id/remover-matricula`
//!
//! Handlers run their directory calls synchronously; the store lock is never
//! held across an `.await`.

pub mod courses;
pub mod enrollments;
pub mod students;

pub use courses::{create_course, delete_course, get_course, list_courses, update_course};
pub use enrollments::{enroll, unenroll};
pub use students::{create_student, delete_student, get_student, list_students, update_student};

use serde::Serialize;

/// Plain confirmation body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// Health check handler
pub async fn health() -> &'static str {
    "OK"
}
