use std::sync::Arc;

use packwise_db::Store;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The in-memory data store.
    pub store: Arc<Store>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build state around a fresh store, seeded according to `config`.
    pub fn new(config: ServerConfig) -> Self {
        let store = if config.seed_reference_data {
            Store::with_reference_data()
        } else {
            Store::new()
        };
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}
