//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps estimator errors to HTTP status codes and returns JSON error bodies
//! with an error code and message. User-facing messages are fixed strings;
//! internal details are logged but never exposed to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use footprint_core::EstimateError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// User-facing message for a non-numeric amount.
pub const INVALID_AMOUNT_MESSAGE: &str =
    "Invalid input. Please enter a numeric value for amount.";

/// User-facing message for any unexpected failure.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Structured JSON error response body.
///
/// All JSON error responses use this format. The message for 500-class
/// errors is the fixed generic string; the underlying cause only reaches
/// the log.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "VALIDATION_ERROR").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
///
/// The set is deliberately small: the estimator's only failure is a
/// non-numeric amount, the read API can miss a key, and everything else is
/// the defensive internal bucket.
#[derive(Error, Debug)]
pub enum AppError {
    /// The submitted amount is not numeric (422). Carries the estimator
    /// error so the log sees the raw cause; the client sees the fixed
    /// validation message.
    #[error("invalid amount: {0}")]
    InvalidAmount(#[from] EstimateError),

    /// Resource not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Internal server error (500). Cause is logged but not returned to the
    /// client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code and machine-readable error code for this error.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::InvalidAmount(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // Fixed user-facing messages; the raw cause stays in the log.
        let message = match &self {
            Self::InvalidAmount(_) => INVALID_AMOUNT_MESSAGE.to_string(),
            Self::NotFound(_) => self.to_string(),
            Self::Internal(_) => GENERIC_ERROR_MESSAGE.to_string(),
        };

        match &self {
            Self::InvalidAmount(_) => tracing::error!(error = %self, "amount validation failed"),
            Self::Internal(_) => tracing::error!(error = %self, "internal server error"),
            Self::NotFound(_) => {}
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}
