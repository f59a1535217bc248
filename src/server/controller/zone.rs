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
        zone::CreateZoneDto,
    },
    server::{
        error::AppError, model::zone::CreateZoneParams, query::params::FeatureParams,
        service::zone::ZoneService, state::AppState,
    },
};

/// Tag for grouping zone endpoints in OpenAPI documentation
pub static ZONE_TAG: &str = "zone";

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_zones, create_zone))
        .routes(routes!(get_zone_by_id, delete_zone))
}

/// List zones.
///
/// Each record carries its `city` and `department` in place of their IDs, unless
/// `fields` leaves the IDs out. Filters on `boundary` are rejected.
///
/// # Returns
/// - `200 OK` - Page of zones
/// - `400 Bad Request` - Invalid filter value or filter on the boundary
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/zones",
    tag = ZONE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-based (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 100)"),
        ("sort" = Option<String>, Query, description = "Comma-separated fields, `-` prefix for descending"),
        ("fields" = Option<String>, Query, description = "Comma-separated fields to include")
    ),
    responses(
        (status = 200, description = "Successfully retrieved zones"),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_zones(
    State(state): State<AppState>,
    params: FeatureParams,
) -> Result<impl IntoResponse, AppError> {
    let service = ZoneService::new(&state.db);

    let zones = service.list(&params, state.query_options).await?;

    Ok((StatusCode::OK, Json(ListResponse::new("zones", zones))))
}

/// Create a zone.
///
/// The boundary must be a closed GeoJSON polygon and the referenced city and
/// department must exist.
///
/// # Returns
/// - `201 Created` - The created zone with its city and department
/// - `400 Bad Request` - Invalid boundary, blank name, or unknown city/department
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/zones",
    tag = ZONE_TAG,
    request_body = CreateZoneDto,
    responses(
        (status = 201, description = "Successfully created zone"),
        (status = 400, description = "Invalid zone data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_zone(
    State(state): State<AppState>,
    Json(payload): Json<CreateZoneDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ZoneService::new(&state.db);

    let params = CreateZoneParams::from_dto(payload)?;

    let zone = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new("zone", zone.into_dto())),
    ))
}

/// Get a zone by ID with its city and department.
#[utoipa::path(
    get,
    path = "/api/zones/{id}",
    tag = ZONE_TAG,
    params(
        ("id" = i32, Path, description = "Zone ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved zone"),
        (status = 404, description = "Zone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_zone_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ZoneService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(zone) => Ok((
            StatusCode::OK,
            Json(DataResponse::new("zone", zone.into_dto())),
        )),
        None => Err(AppError::NotFound("Zone not found".to_string())),
    }
}

/// Delete a zone.
///
/// # Returns
/// - `204 No Content` - Zone deleted
/// - `404 Not Found` - No zone with that ID
/// - `409 Conflict` - Complaints were filed in the zone
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/zones/{id}",
    tag = ZONE_TAG,
    params(
        ("id" = i32, Path, description = "Zone ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted zone"),
        (status = 404, description = "Zone not found", body = ErrorDto),
        (status = 409, description = "Zone is referenced by complaints", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_zone(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ZoneService::new(&state.db);

    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Zone not found".to_string()))
    }
}
