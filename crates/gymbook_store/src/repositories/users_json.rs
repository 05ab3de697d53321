//! JSON document implementation of the user repository

use std::sync::Arc;

use gymbook_common::now_timestamp;
use tracing::info;

use crate::client::JsonStore;
use crate::error::StoreError;
use crate::repositories::users::{email_taken, User, UserPatch, UserRepository, EMAIL_TAKEN};

/// User repository over the `users` document of a [`JsonStore`]
#[derive(Debug, Clone)]
pub struct JsonUserRepository {
    store: Arc<JsonStore>,
}

impl JsonUserRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

impl UserRepository for JsonUserRepository {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let _guard = self.store.lock().await;
        Ok(self.store.load_users().await)
    }

    async fn find(&self, id: &str) -> Result<Option<User>, StoreError> {
        let _guard = self.store.lock().await;
        let users = self.store.load_users().await;
        Ok(users.into_iter().find(|u| u.id == id))
    }

    async fn insert(&self, user: User) -> Result<User, StoreError> {
        let _guard = self.store.lock().await;
        let mut users = self.store.load_users().await;

        if email_taken(&users, &user.email, None) {
            return Err(StoreError::UniqueViolation(EMAIL_TAKEN.to_string()));
        }

        users.push(user.clone());
        self.store.save_users(&users).await?;
        info!("Registered user {}", user.id);
        Ok(user)
    }

    async fn update(&self, id: &str, patch: UserPatch) -> Result<User, StoreError> {
        let _guard = self.store.lock().await;
        let mut users = self.store.load_users().await;

        let index = users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| StoreError::NotFound("User not found".to_string()))?;

        let mut user = users[index].clone();
        patch.apply(&mut user);
        if email_taken(&users, &user.email, Some(id)) {
            return Err(StoreError::UniqueViolation(EMAIL_TAKEN.to_string()));
        }
        user.updated_at = now_timestamp();

        users[index] = user.clone();
        self.store.save_users(&users).await?;
        info!("Updated user {}", user.id);
        Ok(user)
    }
}
