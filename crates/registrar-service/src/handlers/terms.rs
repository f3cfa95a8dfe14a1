//! Current and next semester handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use registrar_core::{SemesterEntry, Term};

use super::{success, SuccessResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Get the active current semester.
pub async fn get_current(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SemesterEntry>, ApiError> {
    state
        .admin
        .current_semester()
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("No current semester assigned".into()))
}

/// Assign the current semester.
pub async fn assign_current(
    State(state): State<Arc<AppState>>,
    Json(term): Json<Term>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.admin.assign_current_semester(&term).await?;
    Ok(success())
}

/// Get the active next semester.
pub async fn get_next(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SemesterEntry>, ApiError> {
    state
        .admin
        .next_semester()
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("No next semester assigned".into()))
}

/// Assign the next semester.
pub async fn assign_next(
    State(state): State<Arc<AppState>>,
    Json(term): Json<Term>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.admin.assign_next_semester(&term).await?;
    Ok(success())
}
