//! Catalog handlers: account types, departments, grades, semester labels,
//! instructors and courses.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use registrar_core::{
    AccountType, Course, CourseId, Department, DepartmentId, Grade, Instructor, InstructorId,
    Semester,
};

use super::{success, NameRequest, SuccessResponse};
use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Account Types
// =============================================================================

/// List account types.
pub async fn list_account_types(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AccountType>>, ApiError> {
    Ok(Json(state.admin.list_account_types().await?))
}

/// Create an account type.
pub async fn create_account_type(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NameRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.admin.create_account_type(&body.name).await?;
    Ok(success())
}

/// Delete an account type.
pub async fn delete_account_type(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.admin.delete_account_type(&name).await?;
    Ok(success())
}

// =============================================================================
// Departments
// =============================================================================

/// Create department request.
#[derive(Debug, Deserialize)]
pub struct CreateDepartmentRequest {
    /// Explicit id; assigned by the store when omitted.
    #[serde(default)]
    pub id: Option<DepartmentId>,
    /// Department name.
    pub name: String,
}

/// List departments.
pub async fn list_departments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Department>>, ApiError> {
    Ok(Json(state.admin.list_departments().await?))
}

/// Create a department.
pub async fn create_department(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateDepartmentRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.admin.create_department(body.id, &body.name).await?;
    Ok(success())
}

/// Delete a department.
pub async fn delete_department(
    State(state): State<Arc<AppState>>,
    Path(id): Path<DepartmentId>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.admin.delete_department(id).await?;
    Ok(success())
}

// =============================================================================
// Grades
// =============================================================================

/// List grades.
pub async fn list_grades(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Grade>>, ApiError> {
    Ok(Json(state.admin.list_grades().await?))
}

/// Create a grade.
pub async fn create_grade(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NameRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.admin.create_grade(&body.name).await?;
    Ok(success())
}

/// Delete a grade.
pub async fn delete_grade(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.admin.delete_grade(&name).await?;
    Ok(success())
}

// =============================================================================
// Semester labels
// =============================================================================

/// List semester labels.
pub async fn list_semesters(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Semester>>, ApiError> {
    Ok(Json(state.admin.list_semesters().await?))
}

/// Create a semester label.
pub async fn create_semester(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NameRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.admin.create_semester(&body.name).await?;
    Ok(success())
}

/// Delete a semester label.
pub async fn delete_semester(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.admin.delete_semester(&name).await?;
    Ok(success())
}

// =============================================================================
// Instructors
// =============================================================================

/// List instructors.
pub async fn list_instructors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Instructor>>, ApiError> {
    Ok(Json(state.admin.list_instructors().await?))
}

/// Create an instructor.
pub async fn create_instructor(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Instructor>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.admin.create_instructor(&body).await?;
    Ok(success())
}

/// Delete an instructor.
pub async fn delete_instructor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<InstructorId>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.admin.delete_instructor(id).await?;
    Ok(success())
}

// =============================================================================
// Courses
// =============================================================================

/// Largest accepted course cost, in dollars.
const MAX_COST: f64 = 1_000_000_000.0;

/// Create course request.
#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    /// Course identifier.
    pub id: CourseId,
    /// Course title.
    pub title: String,
    /// Owning department.
    pub dept: DepartmentId,
    /// Credit hours.
    pub credits: i32,
    /// Cost in dollars, at most two fractional digits.
    pub cost: f64,
}

/// Update course request; every field is overwritten.
#[derive(Debug, Deserialize)]
pub struct UpdateCourseRequest {
    /// New title.
    pub title: String,
    /// New department.
    pub dept: DepartmentId,
    /// New credit hours.
    pub credits: i32,
    /// New cost in dollars, at most two fractional digits.
    pub cost: f64,
}

/// Course response.
#[derive(Debug, Serialize)]
pub struct CourseResponse {
    /// Course identifier.
    pub id: CourseId,
    /// Course title.
    pub title: String,
    /// Owning department.
    pub dept: DepartmentId,
    /// Credit hours.
    pub credits: i32,
    /// Cost in cents.
    pub cost_cents: i64,
    /// Cost formatted as dollars.
    pub cost_formatted: String,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        let cost_formatted = course.cost_formatted();
        Self {
            id: course.id,
            title: course.title,
            dept: course.dept,
            credits: course.credits,
            cost_cents: course.cost_cents,
            cost_formatted,
        }
    }
}

/// Convert a dollar cost to cents.
fn cents_from_cost(cost: f64) -> Result<i64, ApiError> {
    if !cost.is_finite() || cost < 0.0 {
        return Err(ApiError::BadRequest("cost must not be negative".into()));
    }
    if cost > MAX_COST {
        return Err(ApiError::BadRequest("cost is too large".into()));
    }

    let scaled = cost * 100.0;
    let rounded = scaled.round();
    if (scaled - rounded).abs() > 1e-6 {
        return Err(ApiError::BadRequest(
            "cost must have at most two decimal places".into(),
        ));
    }

    #[allow(clippy::cast_possible_truncation)]
    let cents = rounded as i64;
    Ok(cents)
}

/// List courses.
pub async fn list_courses(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CourseResponse>>, ApiError> {
    let courses = state.admin.list_courses().await?;
    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

/// Create a course.
pub async fn create_course(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateCourseRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let course = Course {
        id: body.id,
        title: body.title,
        dept: body.dept,
        credits: body.credits,
        cost_cents: cents_from_cost(body.cost)?,
    };
    state.admin.create_course(&course).await?;
    Ok(success())
}

/// Update a course.
pub async fn update_course(
    State(state): State<Arc<AppState>>,
    Path(id): Path<CourseId>,
    Json(body): Json<UpdateCourseRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let course = Course {
        id,
        title: body.title,
        dept: body.dept,
        credits: body.credits,
        cost_cents: cents_from_cost(body.cost)?,
    };
    state.admin.update_course(&course).await?;
    Ok(success())
}

/// Delete a course.
pub async fn delete_course(
    State(state): State<Arc<AppState>>,
    Path(id): Path<CourseId>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.admin.delete_course(id).await?;
    Ok(success())
}
