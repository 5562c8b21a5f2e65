//! # HTML Form Flow
//!
//! The browser-facing pages:
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `GET` | `/` | `index` |
//! | `POST` | `/calculate` | `calculate` |
//!
//! `POST /calculate` accepts the urlencoded form (`activity_type`, `amount`)
//! and either renders the result view or queues a flash message and
//! redirects back to the form. Unknown activity types are not an error here:
//! they render a zero-emissions result with the fallback advisory.

use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::flash::{self, Flash};
use crate::render;
use crate::state::AppState;

/// The submitted form. Both fields arrive as raw text; the estimator does
/// the parsing.
#[derive(Debug, Deserialize)]
pub struct CalculateForm {
    pub activity_type: String,
    pub amount: String,
}

/// Build the page router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/calculate", post(calculate))
}

/// GET / — the input form, with any queued flash message shown once.
async fn index(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Html<String>) {
    let (jar, flash) = flash::take(jar);
    (jar, Html(render::index_page(state.catalog(), flash)))
}

/// POST /calculate — estimate and render, or flash and redirect.
async fn calculate(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<CalculateForm>,
) -> Response {
    match state.estimator().estimate(&form.activity_type, &form.amount) {
        Ok(estimate) => {
            Html(render::result_page(estimate.emissions_kg, &estimate.advisory)).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "amount validation failed");
            let jar = jar.add(Flash::InvalidAmount.cookie());
            (jar, Redirect::to("/")).into_response()
        }
    }
}
