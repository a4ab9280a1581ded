//! Application state management

use domain_products::CatalogStore;

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: crate::config::Config,
    pub store: CatalogStore,
}

impl AppState {
    /// State with the seed records loaded under the configured id policy
    pub fn seeded(config: crate::config::Config) -> Self {
        let store = CatalogStore::seeded(config.catalog.id_policy);
        Self { config, store }
    }
}
