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
        city::{CityDto, CreateCityDto, UpdateCityDto},
    },
    server::{
        error::AppError,
        model::city::{CreateCityParams, UpdateCityParams},
        query::params::FeatureParams,
        service::city::CityService,
        state::AppState,
    },
};

/// Tag for grouping city endpoints in OpenAPI documentation
pub static CITY_TAG: &str = "city";

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_cities, create_city))
        .routes(routes!(get_city_by_id, update_city, delete_city))
}

/// List cities.
///
/// Supports exact-match and range filters on any column, `sort`, `fields`, `page`
/// and `limit`. Records are returned under `cities`.
///
/// # Returns
/// - `200 OK` - Page of cities
/// - `400 Bad Request` - A filter value does not match its column type
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cities",
    tag = CITY_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-based (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 100)"),
        ("sort" = Option<String>, Query, description = "Comma-separated fields, `-` prefix for descending"),
        ("fields" = Option<String>, Query, description = "Comma-separated fields to include")
    ),
    responses(
        (status = 200, description = "Successfully retrieved cities"),
        (status = 400, description = "Invalid filter value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cities(
    State(state): State<AppState>,
    params: FeatureParams,
) -> Result<impl IntoResponse, AppError> {
    let service = CityService::new(&state.db);

    let cities = service.list(&params, state.query_options).await?;

    Ok((StatusCode::OK, Json(ListResponse::new("cities", cities))))
}

/// Create a city.
///
/// # Returns
/// - `201 Created` - The created city
/// - `400 Bad Request` - Blank name or state
/// - `409 Conflict` - A city with that name already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/cities",
    tag = CITY_TAG,
    request_body = CreateCityDto,
    responses(
        (status = 201, description = "Successfully created city"),
        (status = 400, description = "Invalid city data", body = ErrorDto),
        (status = 409, description = "City name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_city(
    State(state): State<AppState>,
    Json(payload): Json<CreateCityDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CityService::new(&state.db);

    let params = CreateCityParams::from_dto(payload)?;

    let city = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new("city", CityDto::from(city))),
    ))
}

/// Get a city by ID.
///
/// # Returns
/// - `200 OK` - The city
/// - `404 Not Found` - No city with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cities/{id}",
    tag = CITY_TAG,
    params(
        ("id" = i32, Path, description = "City ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved city"),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_city_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CityService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(city) => Ok((
            StatusCode::OK,
            Json(DataResponse::new("city", CityDto::from(city))),
        )),
        None => Err(AppError::NotFound("City not found".to_string())),
    }
}

/// Update a city.
///
/// Only fields present in the body are changed.
///
/// # Returns
/// - `200 OK` - The updated city
/// - `400 Bad Request` - A present field is blank
/// - `404 Not Found` - No city with that ID
/// - `409 Conflict` - The new name is already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/cities/{id}",
    tag = CITY_TAG,
    params(
        ("id" = i32, Path, description = "City ID")
    ),
    request_body = UpdateCityDto,
    responses(
        (status = 200, description = "Successfully updated city"),
        (status = 400, description = "Invalid city data", body = ErrorDto),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 409, description = "City name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_city(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCityDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CityService::new(&state.db);

    let params = UpdateCityParams::from_dto(id, payload)?;

    match service.update(params).await? {
        Some(city) => Ok((
            StatusCode::OK,
            Json(DataResponse::new("city", CityDto::from(city))),
        )),
        None => Err(AppError::NotFound("City not found".to_string())),
    }
}

/// Delete a city.
///
/// # Returns
/// - `204 No Content` - City deleted
/// - `404 Not Found` - No city with that ID
/// - `409 Conflict` - Zones still belong to the city
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/cities/{id}",
    tag = CITY_TAG,
    params(
        ("id" = i32, Path, description = "City ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted city"),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 409, description = "City is referenced by zones", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_city(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CityService::new(&state.db);

    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("City not found".to_string()))
    }
}
