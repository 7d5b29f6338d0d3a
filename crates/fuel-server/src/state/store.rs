//! Read-only application state.

use std::sync::Arc;

use fuel_core::StationCatalog;

use crate::config::Config;

/// Shared by every request. The catalog is loaded once and never mutated, so
/// planning calls read it without locking.
pub struct AppState {
    catalog: Arc<StationCatalog>,
    config: Config,
}

impl AppState {
    pub fn new(catalog: StationCatalog, config: Config) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config,
        }
    }

    pub fn catalog(&self) -> Arc<StationCatalog> {
        Arc::clone(&self.catalog)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
