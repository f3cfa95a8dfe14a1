//! Class handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use registrar_core::{Class, ClassChanges, ClassKey, NewClass};

use super::{success, SuccessResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Update class request.
#[derive(Debug, Deserialize)]
pub struct UpdateClassRequest {
    /// The class as it is today.
    pub key: ClassKey,
    /// What it should become.
    pub changes: ClassChanges,
}

/// List all classes.
pub async fn list_classes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Class>>, ApiError> {
    Ok(Json(state.admin.list_classes().await?))
}

/// List the classes of the current semester.
pub async fn list_current_classes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Class>>, ApiError> {
    Ok(Json(state.admin.list_current_classes().await?))
}

/// List the classes of the next semester.
pub async fn list_next_classes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Class>>, ApiError> {
    Ok(Json(state.admin.list_next_classes().await?))
}

/// Create a class.
pub async fn create_class(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewClass>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.admin.create_class(&body).await?;
    Ok(success())
}

/// Update a class.
pub async fn update_class(
    State(state): State<Arc<AppState>>,
    Json(body): Json<UpdateClassRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.admin.update_class(&body.key, &body.changes).await?;
    Ok(success())
}

/// Delete a class.
pub async fn delete_class(
    State(state): State<Arc<AppState>>,
    Json(key): Json<ClassKey>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.admin.delete_class(&key).await?;
    Ok(success())
}
