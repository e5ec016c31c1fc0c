//! HTTP error mapping
//!
//! Converts [`DirectoryError`]s and extractor rejections into JSON responses.

use crate::directory::DirectoryError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Error returned by every route handler
#[derive(Debug)]
pub struct ApiError(pub DirectoryError);

/// Body of 4xx responses
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// Body of 500 responses
#[derive(Debug, Serialize)]
pub struct StoreErrorBody {
    pub error: &'static str,
    pub details: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            DirectoryError::Validation(_) => StatusCode::BAD_REQUEST,
            DirectoryError::Conflict(_) => StatusCode::CONFLICT,
            DirectoryError::NotFound(_) => StatusCode::NOT_FOUND,
            DirectoryError::AlreadyEnrolled => StatusCode::BAD_REQUEST,
            DirectoryError::EnrollmentNotFound => StatusCode::BAD_REQUEST,
            DirectoryError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        ApiError(err)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError(DirectoryError::validation(format!(
            "Identificador inválido: {}",
            rejection.body_text()
        )))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(DirectoryError::validation(format!(
            "Corpo da requisição inválido: {}",
            rejection.body_text()
        )))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self.0 {
            DirectoryError::Store { context, details } => {
                tracing::error!("{}: {}", context, details);
                let body = StoreErrorBody {
                    error: context,
                    details,
                };
                (status, Json(body)).into_response()
            }
            other => {
                tracing::debug!("request rejected ({}): {}", status, other);
                let body = MessageBody {
                    message: other.to_string(),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError(DirectoryError::validation("x")).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(DirectoryError::Conflict("x".to_string())).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError(DirectoryError::NotFound("x".to_string())).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError(DirectoryError::AlreadyEnrolled).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(DirectoryError::EnrollmentNotFound).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(DirectoryError::Store {
                context: "Erro ao buscar cursos",
                details: "boom".to_string()
            })
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError(DirectoryError::AlreadyEnrolled).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
