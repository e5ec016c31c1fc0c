//! Enrollment routes: `/alunos/:id/matricular` and `/alunos/:id/remover-matricula`

use crate::directory::messages::{ENROLLMENT_REMOVED, STUDENT_ENROLLED};
use crate::directory::{EnrollmentInput, StudentView};
use crate::server::error::ApiError;
use crate::server::ServerState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

/// Response for enroll and unenroll, carrying the refreshed student
#[derive(Debug, Serialize)]
pub struct EnrollmentResponse {
    pub message: &'static str,
    pub aluno: StudentView,
}

pub async fn enroll(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<EnrollmentInput>, JsonRejection>,
) -> Result<Json<EnrollmentResponse>, ApiError> {
    let Path(student_id) = id?;
    let Json(input) = payload?;
    let aluno = state.directory.enroll(student_id, &input)?;
    Ok(Json(EnrollmentResponse {
        message: STUDENT_ENROLLED,
        aluno,
    }))
}

pub async fn unenroll(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<EnrollmentInput>, JsonRejection>,
) -> Result<Json<EnrollmentResponse>, ApiError> {
    let Path(student_id) = id?;
    let Json(input) = payload?;
    let aluno = state.directory.unenroll(student_id, &input)?;
    Ok(Json(EnrollmentResponse {
        message: ENROLLMENT_REMOVED,
        aluno,
    }))
}
