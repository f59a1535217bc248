use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::{DataResponse, ErrorDto, ListResponse},
        department::{CreateDepartmentDto, DepartmentDto, UpdateDepartmentDto},
    },
    server::{
        error::AppError,
        model::department::{CreateDepartmentParams, UpdateDepartmentParams},
        query::params::FeatureParams,
        service::department::DepartmentService,
        state::AppState,
    },
};

/// Tag for grouping department endpoints in OpenAPI documentation
pub static DEPARTMENT_TAG: &str = "department";

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_departments, create_department))
        .routes(routes!(get_department_by_id, update_department, delete_department))
}

/// List departments.
///
/// Supports exact-match and range filters on any column, `sort`, `fields`, `page`
/// and `limit`. Records are returned under `departments`.
///
/// # Returns
/// - `200 OK` - Page of departments
/// - `400 Bad Request` - A filter value does not match its column type
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/departments",
    tag = DEPARTMENT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-based (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 100)"),
        ("sort" = Option<String>, Query, description = "Comma-separated fields, `-` prefix for descending"),
        ("fields" = Option<String>, Query, description = "Comma-separated fields to include")
    ),
    responses(
        (status = 200, description = "Successfully retrieved departments"),
        (status = 400, description = "Invalid filter value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_departments(
    State(state): State<AppState>,
    params: FeatureParams,
) -> Result<impl IntoResponse, AppError> {
    let service = DepartmentService::new(&state.db);

    let departments = service.list(&params, state.query_options).await?;

    Ok((StatusCode::OK, Json(ListResponse::new("departments", departments))))
}

/// Create a department.
///
/// # Returns
/// - `201 Created` - The created department
/// - `400 Bad Request` - Blank name or contact email
/// - `409 Conflict` - A department with that name already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/departments",
    tag = DEPARTMENT_TAG,
    request_body = CreateDepartmentDto,
    responses(
        (status = 201, description = "Successfully created department"),
        (status = 400, description = "Invalid department data", body = ErrorDto),
        (status = 409, description = "Department name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_department(
    State(state): State<AppState>,
    Json(payload): Json<CreateDepartmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = DepartmentService::new(&state.db);

    let params = CreateDepartmentParams::from_dto(payload)?;

    let department = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new("department", DepartmentDto::from(department))),
    ))
}

/// Get a department by ID.
///
/// # Returns
/// - `200 OK` - The department
/// - `404 Not Found` - No department with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/departments/{id}",
    tag = DEPARTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved department"),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_department_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = DepartmentService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(department) => Ok((
            StatusCode::OK,
            Json(DataResponse::new("department", DepartmentDto::from(department))),
        )),
        None => Err(AppError::NotFound("Department not found".to_string())),
    }
}

/// Update a department.
///
/// Only fields present in the body are changed.
///
/// # Returns
/// - `200 OK` - The updated department
/// - `400 Bad Request` - A present field is blank
/// - `404 Not Found` - No department with that ID
/// - `409 Conflict` - The new name is already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/departments/{id}",
    tag = DEPARTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Department ID")
    ),
    request_body = UpdateDepartmentDto,
    responses(
        (status = 200, description = "Successfully updated department"),
        (status = 400, description = "Invalid department data", body = ErrorDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 409, description = "Department name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_department(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDepartmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = DepartmentService::new(&state.db);

    let params = UpdateDepartmentParams::from_dto(id, payload)?;

    match service.update(params).await? {
        Some(department) => Ok((
            StatusCode::OK,
            Json(DataResponse::new("department", DepartmentDto::from(department))),
        )),
        None => Err(AppError::NotFound("Department not found".to_string())),
    }
}

/// Delete a department.
///
/// # Returns
/// - `204 No Content` - Department deleted
/// - `404 Not Found` - No department with that ID
/// - `409 Conflict` - Zones are still assigned to the department
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/departments/{id}",
    tag = DEPARTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Department ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted department"),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 409, description = "Department is referenced by zones", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_department(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = DepartmentService::new(&state.db);

    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Department not found".to_string()))
    }
}
