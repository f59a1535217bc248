use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::api::{ErrorDto, ListResponse},
    server::{
        error::AppError, query::params::FeatureParams, service::activity::ActivityService,
        state::AppState,
    },
};

/// Tag for grouping activity feed endpoints in OpenAPI documentation
pub static ACTIVITY_TAG: &str = "activity";

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(get_activities))
}

/// List the activity feed.
///
/// Newest first by default. Each entry carries its `complaint` in place of
/// `complaint_id`; filter with `complaintId=<id>` for the timeline of one complaint.
///
/// # Returns
/// - `200 OK` - Page of feed entries
/// - `400 Bad Request` - A filter value does not match its column type
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/activities",
    tag = ACTIVITY_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, 1-based (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 100)"),
        ("sort" = Option<String>, Query, description = "Comma-separated fields, `-` prefix for descending"),
        ("fields" = Option<String>, Query, description = "Comma-separated fields to include")
    ),
    responses(
        (status = 200, description = "Successfully retrieved activity feed"),
        (status = 400, description = "Invalid filter value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_activities(
    State(state): State<AppState>,
    params: FeatureParams,
) -> Result<impl IntoResponse, AppError> {
    let service = ActivityService::new(&state.db);

    let activities = service.list(&params, state.query_options).await?;

    Ok((StatusCode::OK, Json(ListResponse::new("activities", activities))))
}
