//! # footprint-core — Emissions Estimator
//!
//! Core domain logic for the footprint tracker: the immutable
//! [`ActivityCatalog`] (emission factors and advisory strings keyed by
//! activity type) and the [`Estimator`] that maps an activity type and a raw
//! amount string to an emissions estimate.
//!
//! ## Contract
//!
//! ```text
//! estimate(activity_type, amount_raw) → Estimate | EstimateError
//! ```
//!
//! - A non-numeric amount is the only error ([`EstimateError::InvalidAmount`]).
//! - Unknown activity types are NOT an error: they resolve to a zero
//!   emission factor and the fallback advisory.
//! - `emissions_kg = factor * amount`, unrounded and unclamped.
//!
//! ## Crate Policy
//!
//! - Pure and synchronous — no I/O, no logging, no shared mutable state.
//! - The catalog is built once and passed in explicitly; nothing here reads
//!   ambient globals, so tests can substitute their own tables.

pub mod catalog;
pub mod estimate;

pub use catalog::{Activity, ActivityCatalog, FALLBACK_ADVISORY};
pub use estimate::{Estimate, EstimateError, Estimator};
