//! Student routes: `/alunos` and `/alunos/:id`

use crate::database::StudentRecord;
use crate::directory::messages::{STUDENTS_LISTED, STUDENT_DELETED};
use crate::directory::{StudentInput, StudentView};
use crate::server::error::ApiError;
use crate::server::handlers::MessageResponse;
use crate::server::ServerState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

/// Response for `GET /alunos`
#[derive(Debug, Serialize)]
pub struct StudentListResponse {
    pub message: &'static str,
    pub alunos: Vec<StudentView>,
}

pub async fn list_students(
    State(state): State<ServerState>,
) -> Result<Json<StudentListResponse>, ApiError> {
    let alunos = state.directory.list_students()?;
    Ok(Json(StudentListResponse {
        message: STUDENTS_LISTED,
        alunos,
    }))
}

pub async fn get_student(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<StudentView>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.directory.get_student(id)?))
}

pub async fn create_student(
    State(state): State<ServerState>,
    payload: Result<Json<StudentInput>, JsonRejection>,
) -> Result<(StatusCode, Json<StudentRecord>), ApiError> {
    let Json(input) = payload?;
    let student = state.directory.create_student(&input)?;
    Ok((StatusCode::CREATED, Json(student)))
}

pub async fn update_student(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<StudentInput>, JsonRejection>,
) -> Result<Json<StudentRecord>, ApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    Ok(Json(state.directory.update_student(id, &input)?))
}

pub async fn delete_student(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = id?;
    state.directory.delete_student(id)?;
    Ok(Json(MessageResponse::new(STUDENT_DELETED)))
}
