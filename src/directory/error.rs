//! Error taxonomy of the enrollment directory

use thiserror::Error;

/// Result type for directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Errors returned by [`EnrollmentDirectory`](super::EnrollmentDirectory)
///
/// Display strings are the messages returned to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// A required field is missing or empty
    #[error("{0}")]
    Validation(String),

    /// A course name or student email is already taken
    #[error("{0}")]
    Conflict(String),

    /// No course or student with the given id
    #[error("{0}")]
    NotFound(String),

    /// The (student, course) pair is already enrolled
    #[error("Aluno já está matriculado neste curso.")]
    AlreadyEnrolled,

    /// The (student, course) pair to remove does not exist
    #[error("Matrícula não encontrada.")]
    EnrollmentNotFound,

    /// The underlying store failed
    #[error("{context}: {details}")]
    Store {
        context: &'static str,
        details: String,
    },
}

impl DirectoryError {
    pub fn validation(message: impl Into<String>) -> Self {
        DirectoryError::Validation(message.into())
    }

    /// Build a mapper from a store error to [`DirectoryError::Store`]
    pub(crate) fn store(context: &'static str) -> impl FnOnce(anyhow::Error) -> Self {
        move |e| DirectoryError::Store {
            context,
            details: e.to_string(),
        }
    }

    pub fn is_store_error(&self) -> bool {
        matches!(self, DirectoryError::Store { .. })
    }
}
