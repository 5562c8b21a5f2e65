//! # Emissions Estimator
//!
//! The one operation this service exists for: map an activity type and a raw
//! amount string to an emissions estimate and an advisory.
//!
//! The estimator is stateless and idempotent — every call is an independent
//! multiplication against the immutable catalog. The error set is closed:
//! the only reachable failure is a non-numeric amount. Unknown activity
//! types are not an error; they degrade to a zero-emissions estimate with
//! the fallback advisory.

use std::num::ParseFloatError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::ActivityCatalog;

/// Result of a successful estimate. Transient — built per request and
/// discarded after rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Estimated emissions in kg CO2. Unclamped: negative amounts produce
    /// negative emissions, unknown activity types produce zero.
    pub emissions_kg: f64,
    /// Suggestion for a lower-emission alternative.
    pub advisory: String,
}

/// Failures the estimator can produce.
#[derive(Debug, Error)]
pub enum EstimateError {
    /// The submitted amount is not parseable as a number.
    #[error("amount {raw:?} is not numeric: {source}")]
    InvalidAmount {
        /// The raw form field, kept for the error log.
        raw: String,
        #[source]
        source: ParseFloatError,
    },
}

/// The Emissions Estimator.
///
/// Owns the activity catalog it evaluates against; the web layer shares one
/// instance across requests behind an `Arc`. No locking is needed — the
/// catalog is read-only after construction.
#[derive(Debug, Clone)]
pub struct Estimator {
    catalog: ActivityCatalog,
}

impl Estimator {
    /// Build an estimator over the given catalog.
    pub fn new(catalog: ActivityCatalog) -> Self {
        Self { catalog }
    }

    /// Estimator over the built-in catalog.
    pub fn builtin() -> Self {
        Self::new(ActivityCatalog::builtin())
    }

    /// The catalog this estimator evaluates against.
    pub fn catalog(&self) -> &ActivityCatalog {
        &self.catalog
    }

    /// Estimate emissions for `activity_type` and a raw amount string.
    ///
    /// The amount is trimmed and parsed as `f64`; parse failure is the only
    /// error path. The emission factor lookup zero-defaults unknown keys, so
    /// the multiplication itself cannot fail. No rounding, clamping, or unit
    /// validation is applied.
    pub fn estimate(&self, activity_type: &str, amount_raw: &str) -> Result<Estimate, EstimateError> {
        let amount: f64 = amount_raw.trim().parse().map_err(|source| {
            EstimateError::InvalidAmount {
                raw: amount_raw.to_string(),
                source,
            }
        })?;

        Ok(Estimate {
            emissions_kg: self.catalog.factor(activity_type) * amount,
            advisory: self.catalog.advisory(activity_type).to_string(),
        })
    }
}
