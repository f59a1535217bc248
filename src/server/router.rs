//! Route table, OpenAPI document and middleware stack.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{activity, city, complaint, department, health, zone},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Civic Tracker API",
        description = "Cities, departments, zones and the complaints filed in them"
    ),
    tags(
        (name = "city", description = "Cities zones belong to"),
        (name = "department", description = "Departments responsible for zones"),
        (name = "zone", description = "Geographic zones with GeoJSON boundaries"),
        (name = "complaint", description = "Complaints filed by citizens"),
        (name = "activity", description = "Activity feed"),
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;

/// API routes together with the OpenAPI document generated from their annotations.
pub fn router() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(city::router())
        .merge(department::router())
        .merge(zone::router())
        .merge(complaint::router())
        .merge(activity::router())
        .merge(health::router())
        .split_for_parts()
}

/// The complete application: API routes, Swagger UI at `/api/docs`, permissive CORS
/// and request tracing.
pub fn app(state: AppState) -> Router {
    let (api, openapi) = router();

    api.merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", openapi))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
