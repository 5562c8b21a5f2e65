//! # Activity Catalog
//!
//! The static lookup tables behind the estimator: one [`Activity`] entry per
//! known activity type, carrying both the emission factor and the advisory
//! text keyed by the same activity-type string.
//!
//! The catalog is constructed once at startup and never mutated afterwards.
//! It is passed explicitly into the [`Estimator`](crate::Estimator) rather
//! than living in ambient global state, so tests can substitute their own
//! tables.
//!
//! ## Lookup semantics
//!
//! Unknown keys are valid lookups: [`ActivityCatalog::factor`] resolves them
//! to a zero coefficient and [`ActivityCatalog::advisory`] to the fixed
//! fallback string. Only the read-API path (`get`) distinguishes unknown keys.

use serde::{Deserialize, Serialize};

/// Advisory returned for activity types the catalog does not know.
pub const FALLBACK_ADVISORY: &str = "No suggestion available.";

// Built-in emission factors (kg CO2 per unit).
const ELECTRICITY_KG_PER_KWH: f64 = 0.233;
const GASOLINE_KG_PER_LITER: f64 = 2.31;
const NATURAL_GAS_KG_PER_CUBIC_METER: f64 = 2.204;

/// One known activity type: emission factor plus advisory text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Lookup key, as submitted by the form (`electricity`, `gasoline`, ...).
    pub key: String,
    /// Human-readable name shown in the form select.
    pub label: String,
    /// Unit the amount is measured in (kWh, liters, ...).
    pub unit: String,
    /// Emission factor in kg CO2 per unit of activity.
    pub factor_kg_per_unit: f64,
    /// Suggestion for a lower-emission alternative.
    pub advisory: String,
}

impl Activity {
    /// Build an activity entry from its parts.
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        unit: impl Into<String>,
        factor_kg_per_unit: f64,
        advisory: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            unit: unit.into(),
            factor_kg_per_unit,
            advisory: advisory.into(),
        }
    }
}

/// Immutable, ordered collection of known activities.
///
/// Ordering is preserved so the form select renders entries in a stable
/// order. With a handful of entries, lookups scan the slice; there is no
/// index to keep in sync.
#[derive(Debug, Clone, Default)]
pub struct ActivityCatalog {
    activities: Vec<Activity>,
}

impl ActivityCatalog {
    /// Build a catalog from an explicit list of activities.
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    /// The built-in catalog: electricity, gasoline, and natural gas.
    pub fn builtin() -> Self {
        Self::new(vec![
            Activity::new(
                "electricity",
                "Electricity",
                "kWh",
                ELECTRICITY_KG_PER_KWH,
                "Consider switching to renewable energy sources or using energy-efficient appliances.",
            ),
            Activity::new(
                "gasoline",
                "Gasoline",
                "liters",
                GASOLINE_KG_PER_LITER,
                "Consider using public transportation or switching to an electric vehicle.",
            ),
            Activity::new(
                "natural_gas",
                "Natural Gas",
                "cubic meters",
                NATURAL_GAS_KG_PER_CUBIC_METER,
                "Consider improving home insulation or using energy-efficient HVAC systems.",
            ),
        ])
    }

    /// Look up an activity by key.
    pub fn get(&self, key: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.key == key)
    }

    /// Emission factor for `key`, in kg CO2 per unit.
    ///
    /// Unknown keys resolve to `0.0` rather than an error: an unrecognized
    /// activity type yields a zero-emissions estimate. The read API layers a
    /// stricter contract on top via [`ActivityCatalog::get`].
    pub fn factor(&self, key: &str) -> f64 {
        self.get(key).map_or(0.0, |a| a.factor_kg_per_unit)
    }

    /// Advisory text for `key`, falling back to [`FALLBACK_ADVISORY`] for
    /// unknown keys.
    pub fn advisory(&self, key: &str) -> &str {
        self.get(key).map_or(FALLBACK_ADVISORY, |a| a.advisory.as_str())
    }

    /// All known activities, in catalog order.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Number of known activities.
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}
