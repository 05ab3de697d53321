// --- File: crates/services/gymbook_backend/src/app_state.rs ---
use gymbook_config::AppConfig;
use gymbook_store::{JsonStore, JsonStoreFactory, StoreError};
use std::sync::Arc;

/// Application state shared by every feature router.
#[derive(Clone, Debug)]
pub struct AppState {
    /// The configuration loaded at startup.
    pub config: Arc<AppConfig>,

    /// The document store, opened and seeded before the server starts.
    pub store: Arc<JsonStore>,
}

impl AppState {
    /// Wrap an already opened store.
    pub fn new(config: Arc<AppConfig>, store: Arc<JsonStore>) -> Self {
        Self { config, store }
    }

    /// Open the store described by `config.storage`, creating the data
    /// directory and empty documents as needed.
    pub async fn open(config: Arc<AppConfig>) -> Result<Self, StoreError> {
        let store = JsonStoreFactory::new().open(&config.storage).await?;
        Ok(Self::new(config, store))
    }
}
