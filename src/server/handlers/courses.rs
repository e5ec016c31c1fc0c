//! Course routes: `/cursos` and `/cursos/:id`

use crate::database::CourseRecord;
use crate::directory::messages::{COURSES_LISTED, COURSE_DELETED};
use crate::directory::CourseInput;
use crate::server::error::ApiError;
use crate::server::handlers::MessageResponse;
use crate::server::ServerState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

/// Response for `GET /cursos`
#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub message: &'static str,
    pub cursos: Vec<CourseRecord>,
}

pub async fn list_courses(
    State(state): State<ServerState>,
) -> Result<Json<CourseListResponse>, ApiError> {
    let cursos = state.directory.list_courses()?;
    Ok(Json(CourseListResponse {
        message: COURSES_LISTED,
        cursos,
    }))
}

pub async fn get_course(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<CourseRecord>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.directory.get_course(id)?))
}

pub async fn create_course(
    State(state): State<ServerState>,
    payload: Result<Json<CourseInput>, JsonRejection>,
) -> Result<(StatusCode, Json<CourseRecord>), ApiError> {
    let Json(input) = payload?;
    let course = state.directory.create_course(&input)?;
    Ok((StatusCode::CREATED, Json(course)))
}

pub async fn update_course(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CourseInput>, JsonRejection>,
) -> Result<Json<CourseRecord>, ApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    Ok(Json(state.directory.update_course(id, &input)?))
}

pub async fn delete_course(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = id?;
    state.directory.delete_course(id)?;
    Ok(Json(MessageResponse::new(COURSE_DELETED)))
}
