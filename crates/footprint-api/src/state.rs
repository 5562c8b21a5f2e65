//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers via
//! the `State` extractor.
//!
//! The state holds exactly one thing: the [`Estimator`] with its immutable
//! activity catalog. There is no database, no session store, and no mutable
//! shared state — the catalog is read-only after startup, so concurrent
//! requests share it through an `Arc` without locking.

use std::sync::Arc;

use footprint_core::{ActivityCatalog, Estimator};

/// Shared application state. Cheap to clone; all clones share the same
/// underlying estimator.
#[derive(Debug, Clone)]
pub struct AppState {
    estimator: Arc<Estimator>,
}

impl AppState {
    /// State over the built-in activity catalog.
    pub fn new() -> Self {
        Self::with_catalog(ActivityCatalog::builtin())
    }

    /// State over an explicit catalog. Used by tests to substitute tables.
    pub fn with_catalog(catalog: ActivityCatalog) -> Self {
        Self {
            estimator: Arc::new(Estimator::new(catalog)),
        }
    }

    /// The shared estimator.
    pub fn estimator(&self) -> &Estimator {
        &self.estimator
    }

    /// The activity catalog behind the estimator.
    pub fn catalog(&self) -> &ActivityCatalog {
        self.estimator.catalog()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
