//! Student handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use registrar_core::{NewStudent, Student, StudentId};

use super::{success, SuccessResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// List students.
pub async fn list_students(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Student>>, ApiError> {
    Ok(Json(state.admin.list_students().await?))
}

/// Create a student.
pub async fn create_student(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewStudent>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.admin.create_student(&body).await?;
    Ok(success())
}

/// Graduate a student.
pub async fn assign_graduation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<StudentId>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.admin.assign_graduation(id).await?;
    Ok(success())
}

/// Place a student on probation.
pub async fn assign_probation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<StudentId>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.admin.assign_probation(id).await?;
    Ok(success())
}

/// Lift a student's probation.
pub async fn remove_probation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<StudentId>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.admin.remove_probation(id).await?;
    Ok(success())
}
