//! Factories for opening the store and building repositories

use std::sync::Arc;

use gymbook_config::models::StorageConfig;
use tracing::info;

use crate::client::JsonStore;
use crate::error::StoreError;
use crate::repositories::{JsonReservationRepository, JsonUserRepository};
use crate::repository::RepositoryFactory;

/// Opens the data directory described by the configuration
#[derive(Debug, Clone, Default)]
pub struct JsonStoreFactory;

impl JsonStoreFactory {
    pub fn new() -> Self {
        Self
    }

    /// Create the store and seed any missing documents
    pub async fn open(&self, config: &StorageConfig) -> Result<Arc<JsonStore>, StoreError> {
        let store = JsonStore::from_config(config);
        store.init().await?;
        info!("Using data directory {}", store.data_dir().display());
        Ok(Arc::new(store))
    }
}

/// Builds the JSON repositories over a shared store
#[derive(Debug, Clone, Default)]
pub struct JsonRepositoryFactory;

impl JsonRepositoryFactory {
    pub fn new() -> Self {
        Self
    }
}

impl RepositoryFactory<JsonUserRepository, Arc<JsonStore>> for JsonRepositoryFactory {
    fn create_repository(&self, store: Arc<JsonStore>) -> JsonUserRepository {
        JsonUserRepository::new(store)
    }
}

impl RepositoryFactory<JsonReservationRepository, Arc<JsonStore>> for JsonRepositoryFactory {
    fn create_repository(&self, store: Arc<JsonStore>) -> JsonReservationRepository {
        JsonReservationRepository::new(store)
    }
}
