//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::CatalogSource;
use crate::config::ServerConfig;
use crate::store::AvailabilityStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds no per-request data and no cached
/// record: the catalog source and the availability store both go back to the
/// file system on every call, so readers always see the most recently
/// completed write.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    catalog: CatalogSource,
    store: AvailabilityStore,
}

impl AppState {
    /// Create a new application state from configuration.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let catalog = CatalogSource::new(&config.menu_path);
        let store = AvailabilityStore::new(&config.availability_path);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                store,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog source.
    #[must_use]
    pub fn catalog(&self) -> &CatalogSource {
        &self.inner.catalog
    }

    /// Get a reference to the availability store.
    #[must_use]
    pub fn store(&self) -> &AvailabilityStore {
        &self.inner.store
    }
}
