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
        complaint::{ComplaintDto, CreateComplaintDto, UpdateComplaintStatusDto},
    },
    server::{
        error::AppError, model::complaint::CreateComplaintParams, query::params::FeatureParams,
        service::complaint::ComplaintService, state::AppState,
    },
};

/// Tag for grouping complaint endpoints in OpenAPI documentation
pub static COMPLAINT_TAG: &str = "complaint";

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_complaints, create_complaint))
        .routes(routes!(get_complaint_by_id))
        .routes(routes!(update_complaint_status))
        .routes(routes!(upvote_complaint))
}

/// List complaints.
///
/// Defaults to newest first. Each record carries its `zone` in place of `zone_id`.
/// Range filters such as `upvotes[gte]=100` or `createdAt[lt]=2026-01-01T00:00:00Z`
/// are supported alongside exact matches such as `status=Pending`.
///
/// # Returns
/// - `200 OK` - Page of complaints
/// - `400 Bad Request` - A filter value does not match its column type
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/complaints",
    tag = COMPLAINT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-based (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 100)"),
        ("sort" = Option<String>, Query, description = "Comma-separated fields, `-` prefix for descending"),
        ("fields" = Option<String>, Query, description = "Comma-separated fields to include")
    ),
    responses(
        (status = 200, description = "Successfully retrieved complaints"),
        (status = 400, description = "Invalid filter value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_complaints(
    State(state): State<AppState>,
    params: FeatureParams,
) -> Result<impl IntoResponse, AppError> {
    let service = ComplaintService::new(&state.db);

    let complaints = service.list(&params, state.query_options).await?;

    Ok((StatusCode::OK, Json(ListResponse::new("complaints", complaints))))
}

/// File a complaint.
///
/// New complaints start as `Pending` with no upvotes and a `Created` entry in the
/// activity feed.
///
/// # Returns
/// - `201 Created` - The filed complaint
/// - `400 Bad Request` - Blank title or unknown zone
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/complaints",
    tag = COMPLAINT_TAG,
    request_body = CreateComplaintDto,
    responses(
        (status = 201, description = "Successfully filed complaint"),
        (status = 400, description = "Invalid complaint data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_complaint(
    State(state): State<AppState>,
    Json(payload): Json<CreateComplaintDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ComplaintService::new(&state.db);

    let params = CreateComplaintParams::from_dto(payload)?;

    let complaint = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new("complaint", ComplaintDto::from(complaint))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/complaints/{id}",
    tag = COMPLAINT_TAG,
    params(
        ("id" = i32, Path, description = "Complaint ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved complaint"),
        (status = 404, description = "Complaint not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_complaint_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ComplaintService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(complaint) => Ok((
            StatusCode::OK,
            Json(DataResponse::new("complaint", ComplaintDto::from(complaint))),
        )),
        None => Err(AppError::NotFound("Complaint not found".to_string())),
    }
}

/// Change the status of a complaint.
///
/// Records a `StatusChanged` entry in the activity feed.
///
/// # Returns
/// - `200 OK` - The updated complaint
/// - `400 Bad Request` - The complaint already has the requested status
/// - `404 Not Found` - No complaint with that ID
/// - `409 Conflict` - Another request changed the status first
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/complaints/{id}/status",
    tag = COMPLAINT_TAG,
    params(
        ("id" = i32, Path, description = "Complaint ID")
    ),
    request_body = UpdateComplaintStatusDto,
    responses(
        (status = 200, description = "Successfully changed complaint status"),
        (status = 400, description = "Status unchanged", body = ErrorDto),
        (status = 404, description = "Complaint not found", body = ErrorDto),
        (status = 409, description = "Status changed by a concurrent request", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_complaint_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateComplaintStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ComplaintService::new(&state.db);

    match service.update_status(id, payload.status.into()).await? {
        Some(complaint) => Ok((
            StatusCode::OK,
            Json(DataResponse::new("complaint", ComplaintDto::from(complaint))),
        )),
        None => Err(AppError::NotFound("Complaint not found".to_string())),
    }
}

/// Upvote a complaint.
///
/// The counter is incremented by the database, so concurrent upvotes are never lost.
///
/// # Returns
/// - `200 OK` - The complaint with its new upvote count
/// - `404 Not Found` - No complaint with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/complaints/{id}/upvote",
    tag = COMPLAINT_TAG,
    params(
        ("id" = i32, Path, description = "Complaint ID")
    ),
    responses(
        (status = 200, description = "Successfully upvoted complaint"),
        (status = 404, description = "Complaint not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upvote_complaint(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ComplaintService::new(&state.db);

    match service.upvote(id).await? {
        Some(complaint) => Ok((
            StatusCode::OK,
            Json(DataResponse::new("complaint", ComplaintDto::from(complaint))),
        )),
        None => Err(AppError::NotFound("Complaint not found".to_string())),
    }
}
