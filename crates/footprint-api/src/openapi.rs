//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented JSON routes into a single OpenAPI spec,
//! served at `/openapi.json`. The HTML pages are browser-facing and are not
//! part of the machine API surface.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the JSON API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Footprint API",
        version = "0.1.0",
        description = "Carbon footprint tracker: maps an activity type and an amount to an emissions estimate via a static catalog, with a canned lower-emission suggestion per activity.\n\nUnknown activity types are not an error for estimation — they yield a zero-emissions estimate with the fallback advisory. A non-numeric amount is the only validation failure.",
        license(name = "Apache-2.0"),
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
    ),
    paths(
        crate::routes::estimates::create_estimate,
        crate::routes::activities::list_activities,
        crate::routes::activities::get_activity,
    ),
    components(schemas(
        crate::routes::estimates::EstimateRequest,
        crate::routes::estimates::EstimateResponse,
        crate::routes::activities::ActivityResponse,
        crate::routes::activities::ActivityListResponse,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "estimates", description = "Emissions estimation"),
        (name = "activities", description = "Activity catalog"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_spec))
}

/// GET /openapi.json — the assembled spec.
async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
