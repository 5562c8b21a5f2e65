//! # Activity Catalog Endpoints
//!
//! Read-only view of the activity catalog:
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `GET` | `/v1/activities` | `list_activities` |
//! | `GET` | `/v1/activities/{key}` | `get_activity` |
//!
//! Unlike the estimate operation, the single-entry lookup rejects unknown
//! keys with 404 — typos are discoverable here without changing the
//! zero-defaulting estimate contract.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use footprint_core::Activity;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::state::AppState;

/// One catalog entry.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ActivityResponse {
    /// Lookup key, as submitted by the form.
    pub key: String,
    /// Human-readable name.
    pub label: String,
    /// Unit the amount is measured in.
    pub unit: String,
    /// Emission factor in kg CO2 per unit.
    pub factor_kg_per_unit: f64,
    /// Suggestion for a lower-emission alternative.
    pub advisory: String,
}

impl From<&Activity> for ActivityResponse {
    fn from(activity: &Activity) -> Self {
        Self {
            key: activity.key.clone(),
            label: activity.label.clone(),
            unit: activity.unit.clone(),
            factor_kg_per_unit: activity.factor_kg_per_unit,
            advisory: activity.advisory.clone(),
        }
    }
}

/// Response envelope for the catalog listing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ActivityListResponse {
    pub activities: Vec<ActivityResponse>,
}

/// Build the activities router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/activities", get(list_activities))
        .route("/v1/activities/{key}", get(get_activity))
}

/// GET /v1/activities — list the catalog in order.
#[utoipa::path(
    get,
    path = "/v1/activities",
    responses(
        (status = 200, description = "Catalog listing", body = ActivityListResponse),
    ),
    tag = "activities"
)]
pub async fn list_activities(State(state): State<AppState>) -> Json<ActivityListResponse> {
    Json(ActivityListResponse {
        activities: state.catalog().activities().iter().map(Into::into).collect(),
    })
}

/// GET /v1/activities/{key} — one catalog entry, 404 for unknown keys.
#[utoipa::path(
    get,
    path = "/v1/activities/{key}",
    params(
        ("key" = String, Path, description = "Activity type key"),
    ),
    responses(
        (status = 200, description = "Catalog entry", body = ActivityResponse),
        (status = 404, description = "Unknown activity type", body = crate::error::ErrorBody),
    ),
    tag = "activities"
)]
pub async fn get_activity(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ActivityResponse>, AppError> {
    state
        .catalog()
        .get(&key)
        .map(|activity| Json(activity.into()))
        .ok_or_else(|| AppError::NotFound(format!("activity {key:?} is not in the catalog")))
}
