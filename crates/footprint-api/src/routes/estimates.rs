//! # Estimate API Endpoints
//!
//! JSON counterpart of the form flow:
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `POST` | `/v1/estimates` | `create_estimate` |
//!
//! The amount field is deliberately a string — the boundary contract is two
//! text fields, and the estimator owns the parsing. A non-numeric amount is
//! a 422 with the fixed validation message; an unknown activity type is NOT
//! an error and yields a zero-emissions estimate with the fallback advisory.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::state::AppState;

/// Request to estimate emissions for one activity.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct EstimateRequest {
    /// Activity type key (e.g. "electricity"). Not validated against the
    /// catalog; unknown keys zero-default.
    pub activity_type: String,
    /// Raw amount text, parsed by the estimator.
    pub amount: String,
}

/// A computed estimate.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EstimateResponse {
    /// Echo of the requested activity type.
    pub activity_type: String,
    /// Estimated emissions in kg CO2.
    pub emissions_kg: f64,
    /// Suggestion for a lower-emission alternative.
    pub advisory: String,
}

/// Build the estimates router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/estimates", post(create_estimate))
}

/// POST /v1/estimates — compute an emissions estimate.
#[utoipa::path(
    post,
    path = "/v1/estimates",
    request_body = EstimateRequest,
    responses(
        (status = 200, description = "Estimate computed", body = EstimateResponse),
        (status = 422, description = "Amount is not numeric", body = crate::error::ErrorBody),
    ),
    tag = "estimates"
)]
pub async fn create_estimate(
    State(state): State<AppState>,
    Json(req): Json<EstimateRequest>,
) -> Result<Json<EstimateResponse>, AppError> {
    let estimate = state.estimator().estimate(&req.activity_type, &req.amount)?;
    Ok(Json(EstimateResponse {
        activity_type: req.activity_type,
        emissions_kg: estimate.emissions_kg,
        advisory: estimate.advisory,
    }))
}
