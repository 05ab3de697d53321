//! Whole-document JSON persistence for Gymbook
//!
//! Users and reservations are kept in two JSON files inside a data directory.
//! The store reloads a document on every read and rewrites it on every
//! write. A single async mutex serializes access so that uniqueness checks
//! and the write that follows them are atomic with respect to other requests.
//!
//! # Example
//!
//! ```rust,no_run
//! use gymbook_config::models::StorageConfig;
//! use gymbook_store::{
//!     JsonRepositoryFactory, JsonStoreFactory, JsonUserRepository, RepositoryFactory,
//! };
//!
//! async fn open_users() -> Result<JsonUserRepository, gymbook_store::StoreError> {
//!     let store = JsonStoreFactory::new().open(&StorageConfig::default()).await?;
//!     Ok(JsonRepositoryFactory::new().create_repository(store))
//! }
//! ```

pub mod client;
pub mod error;
pub mod factory;
pub mod repositories;
pub mod repository;

pub use client::JsonStore;
pub use error::StoreError;
pub use factory::{JsonRepositoryFactory, JsonStoreFactory};
pub use repository::RepositoryFactory;

pub use repositories::{
    JsonReservationRepository, JsonUserRepository, ReservationRepository, StatusChange,
    UserPatch, UserRepository, EMAIL_TAKEN, SLOT_TAKEN,
};

/// Generate an identifier for a new record.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
