//! # footprint-api — Axum Web Layer
//!
//! Web-serving layer for the footprint tracker, built on Axum/Tower/Tokio.
//! Assembles the HTML form flow, the JSON API, health probes, and the
//! OpenAPI spec into a single application.
//!
//! ## Surface
//!
//! | Prefix | Module | Domain |
//! |--------|--------|--------|
//! | `/`, `/calculate` | [`routes::pages`] | HTML form flow |
//! | `/v1/estimates` | [`routes::estimates`] | JSON estimation |
//! | `/v1/activities/*` | [`routes::activities`] | Catalog read API |
//! | `/openapi.json` | [`openapi`] | OpenAPI spec |
//! | `/health/*` | [`app`] | Probes |
//!
//! ## Architecture
//!
//! No business logic in route handlers — parsing and lookup semantics live
//! in `footprint-core`. All JSON errors map to structured responses via
//! [`AppError`]; the form flow maps failures to flash messages instead.

pub mod config;
pub mod error;
pub mod flash;
pub mod openapi;
pub mod render;
pub mod routes;
pub mod state;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Router;
use tower_http::trace::TraceLayer;

pub use crate::error::AppError;
pub use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
///
/// Body size limit: 64 KiB — the largest legitimate request is a small
/// urlencoded form or JSON body. Health probes are mounted alongside the
/// rest; nothing here requires credentials (authentication is out of scope).
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::pages::router())
        .merge(routes::estimates::router())
        .merge(routes::activities::router())
        .merge(openapi::router())
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness))
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — verifies the application can serve estimates.
///
/// The only dependency is the activity catalog; an empty catalog would make
/// every estimate zero and the form select useless, so it reports 503.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    if state.catalog().is_empty() {
        return (StatusCode::SERVICE_UNAVAILABLE, "catalog empty").into_response();
    }
    (StatusCode::OK, "ready").into_response()
}
