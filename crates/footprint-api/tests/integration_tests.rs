//! # Integration Tests for footprint-api
//!
//! Drives the assembled router end to end: the HTML form flow (render,
//! calculate, flash + redirect), the JSON estimate and catalog endpoints,
//! health probes, and the OpenAPI spec.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use footprint_api::AppState;
use footprint_core::ActivityCatalog;

/// Helper: build the test app over the built-in catalog.
fn test_app() -> axum::Router {
    footprint_api::app(AppState::new())
}

/// Helper: read response body as string.
async fn body_string(response: axum::http::Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Helper: GET a path.
async fn get(app: axum::Router, uri: &str) -> axum::http::Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Helper: POST an urlencoded form to /calculate.
async fn post_form(app: axum::Router, body: &str) -> axum::http::Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri("/calculate")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Helper: POST a JSON body to /v1/estimates.
async fn post_estimate(app: axum::Router, json: serde_json::Value) -> axum::http::Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri("/v1/estimates")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
    )
    .await
    .unwrap()
}

// -- Health Probes ------------------------------------------------------------

#[tokio::test]
async fn test_liveness_probe() {
    let response = get(test_app(), "/health/liveness").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn test_readiness_probe() {
    let response = get(test_app(), "/health/readiness").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ready");
}

#[tokio::test]
async fn test_readiness_fails_on_empty_catalog() {
    let app = footprint_api::app(AppState::with_catalog(ActivityCatalog::default()));
    let response = get(app, "/health/readiness").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

// -- Form Page ----------------------------------------------------------------

#[tokio::test]
async fn test_index_renders_form() {
    let response = get(test_app(), "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Calculate Your Carbon Footprint"));
    assert!(body.contains("Electricity (kWh)"));
    assert!(body.contains("Gasoline (liters)"));
    assert!(body.contains("Natural Gas (cubic meters)"));
    assert!(body.contains("action=\"/calculate\""));
}

#[tokio::test]
async fn test_index_without_flash_shows_no_message() {
    let response = get(test_app(), "/").await;
    let body = body_string(response).await;
    assert!(!body.contains("Invalid input."));
    assert!(!body.contains("An error occurred."));
}

#[tokio::test]
async fn test_index_displays_and_clears_flash() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::COOKIE, "footprint_flash=invalid-amount")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    // The cookie must be cleared so the message shows only once.
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("removal cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("footprint_flash="));
    let body = body_string(response).await;
    assert!(body.contains("Invalid input. Please enter a numeric value for amount."));
}

#[tokio::test]
async fn test_index_displays_generic_flash() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::COOKIE, "footprint_flash=internal-error")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_string(response).await;
    assert!(body.contains("An error occurred. Please try again."));
}

#[tokio::test]
async fn test_index_ignores_unknown_flash_codes() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::COOKIE, "footprint_flash=<script>alert(1)</script>")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_string(response).await;
    assert!(!body.contains("<script>"));
    assert!(!body.contains("class=\"flash\""));
}

// -- Calculate (form flow) ----------------------------------------------------

#[tokio::test]
async fn test_calculate_renders_result() {
    let response = post_form(test_app(), "activity_type=gasoline&amount=5").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Carbon Footprint Result"));
    assert!(body.contains(&format!("{} kg CO2", 2.31_f64 * 5.0)));
    assert!(body.contains("Consider using public transportation or switching to an electric vehicle."));
    assert!(body.contains("Calculate again"));
}

#[tokio::test]
async fn test_calculate_unknown_activity_renders_zero_result() {
    let response = post_form(test_app(), "activity_type=solar&amount=10").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("0 kg CO2"));
    assert!(body.contains("No suggestion available."));
}

#[tokio::test]
async fn test_calculate_invalid_amount_redirects_with_flash() {
    let response = post_form(test_app(), "activity_type=electricity&amount=ten").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("flash cookie")
        .to_str()
        .unwrap();
    assert!(set_cookie.contains("footprint_flash=invalid-amount"));
}

#[tokio::test]
async fn test_calculate_empty_amount_redirects_with_flash() {
    let response = post_form(test_app(), "activity_type=electricity&amount=").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_calculate_negative_amount_passes_through() {
    // Documented quirk: no sign validation.
    let response = post_form(test_app(), "activity_type=gasoline&amount=-5").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains(&format!("{} kg CO2", 2.31_f64 * -5.0)));
}

// -- Estimates (JSON API) -----------------------------------------------------

#[tokio::test]
async fn test_estimate_electricity() {
    let response = post_estimate(
        test_app(),
        serde_json::json!({"activity_type": "electricity", "amount": "10"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["activity_type"], "electricity");
    let emissions = body["emissions_kg"].as_f64().unwrap();
    assert!((emissions - 2.33).abs() < 1e-9);
    assert_eq!(
        body["advisory"],
        "Consider switching to renewable energy sources or using energy-efficient appliances."
    );
}

#[tokio::test]
async fn test_estimate_natural_gas() {
    let response = post_estimate(
        test_app(),
        serde_json::json!({"activity_type": "natural_gas", "amount": "2"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    let emissions = body["emissions_kg"].as_f64().unwrap();
    assert!((emissions - 4.408).abs() < 1e-9);
}

#[tokio::test]
async fn test_estimate_unknown_activity_zero_defaults() {
    let response = post_estimate(
        test_app(),
        serde_json::json!({"activity_type": "solar", "amount": "10"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["emissions_kg"].as_f64().unwrap(), 0.0);
    assert_eq!(body["advisory"], "No suggestion available.");
}

#[tokio::test]
async fn test_estimate_invalid_amount_is_422_with_fixed_message() {
    for amount in ["ten", "", "1,2"] {
        let response = post_estimate(
            test_app(),
            serde_json::json!({"activity_type": "electricity", "amount": amount}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(
            body["error"]["message"],
            "Invalid input. Please enter a numeric value for amount."
        );
    }
}

#[tokio::test]
async fn test_estimate_is_idempotent() {
    let req = serde_json::json!({"activity_type": "gasoline", "amount": "5"});
    let a = body_string(post_estimate(test_app(), req.clone()).await).await;
    let b = body_string(post_estimate(test_app(), req).await).await;
    assert_eq!(a, b);
}

// -- Activities (catalog read API) --------------------------------------------

#[tokio::test]
async fn test_list_activities() {
    let response = get(test_app(), "/v1/activities").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    let activities = body["activities"].as_array().unwrap();
    assert_eq!(activities.len(), 3);
    assert_eq!(activities[0]["key"], "electricity");
    assert_eq!(activities[0]["unit"], "kWh");
    assert_eq!(activities[1]["key"], "gasoline");
    assert_eq!(activities[2]["key"], "natural_gas");
}

#[tokio::test]
async fn test_get_activity() {
    let response = get(test_app(), "/v1/activities/electricity").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["key"], "electricity");
    assert!((body["factor_kg_per_unit"].as_f64().unwrap() - 0.233).abs() < 1e-12);
}

#[tokio::test]
async fn test_get_unknown_activity_is_404() {
    // The read API rejects unknown keys even though estimates zero-default.
    let response = get(test_app(), "/v1/activities/solar").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

// -- OpenAPI ------------------------------------------------------------------

#[tokio::test]
async fn test_openapi_spec_is_served() {
    let response = get(test_app(), "/openapi.json").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["info"]["title"], "Footprint API");
    assert!(body["paths"].get("/v1/estimates").is_some());
}
