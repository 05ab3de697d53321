//! Document client for the JSON store
//!
//! Each collection lives in its own JSON file holding an array of records.
//! Every read loads the whole document and every write rewrites it. Callers
//! that read, modify and write must hold the store lock for the whole sequence.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use gymbook_common::{Reservation, User};
use gymbook_config::models::StorageConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

use crate::error::StoreError;

/// Handle to the data directory and its two documents.
#[derive(Debug)]
pub struct JsonStore {
    data_dir: PathBuf,
    users_path: PathBuf,
    reservations_path: PathBuf,
    lock: Mutex<()>,
}

impl JsonStore {
    /// Create a store rooted at `data_dir` with the given document file names.
    pub fn new(
        data_dir: impl Into<PathBuf>,
        users_file: impl AsRef<Path>,
        reservations_file: impl AsRef<Path>,
    ) -> Self {
        let data_dir = data_dir.into();
        Self {
            users_path: data_dir.join(users_file),
            reservations_path: data_dir.join(reservations_file),
            data_dir,
            lock: Mutex::new(()),
        }
    }

    /// Create a store from the storage section of the configuration.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(
            &config.data_dir,
            &config.users_file,
            &config.reservations_file,
        )
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn users_path(&self) -> &Path {
        &self.users_path
    }

    pub fn reservations_path(&self) -> &Path {
        &self.reservations_path
    }

    /// Create the data directory and seed missing documents with `[]`.
    ///
    /// Existing documents are left untouched.
    pub async fn init(&self) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        tokio::fs::create_dir_all(&self.data_dir).await?;
        for path in [&self.users_path, &self.reservations_path] {
            if tokio::fs::try_exists(path).await? {
                continue;
            }
            tokio::fs::write(path, "[]").await?;
            info!("Created empty document {}", path.display());
        }
        Ok(())
    }

    /// Acquire the store lock. Hold the guard across a read-modify-write.
    pub async fn lock(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().await
    }

    /// Read a whole document.
    ///
    /// A missing, unreadable or malformed document reads as an empty
    /// collection. The problem is logged and the next write replaces the file.
    pub async fn read_document<T: DeserializeOwned>(&self, path: &Path) -> Vec<T> {
        let text = match tokio::fs::read_to_string(path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Document {} does not exist yet", path.display());
                return Vec::new();
            }
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&text) {
            Ok(items) => items,
            Err(e) => {
                warn!(
                    "Document {} is not valid JSON, treating as empty: {}",
                    path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Rewrite a whole document as pretty-printed JSON.
    pub async fn write_document<T: Serialize>(
        &self,
        path: &Path,
        items: &[T],
    ) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.data_dir).await?;
        let text = serde_json::to_string_pretty(items)?;
        tokio::fs::write(path, text).await?;
        debug!("Wrote {} records to {}", items.len(), path.display());
        Ok(())
    }

    pub async fn load_users(&self) -> Vec<User> {
        self.read_document(&self.users_path).await
    }

    pub async fn save_users(&self, users: &[User]) -> Result<(), StoreError> {
        self.write_document(&self.users_path, users).await
    }

    pub async fn load_reservations(&self) -> Vec<Reservation> {
        self.read_document(&self.reservations_path).await
    }

    pub async fn save_reservations(&self, reservations: &[Reservation]) -> Result<(), StoreError> {
        self.write_document(&self.reservations_path, reservations).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gymbook_common::Role;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_init_seeds_empty_documents() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(
            dir.path().join("data"),
            "users.json",
            "reservations.json",
        );

        store.init().await.unwrap();

        let users = std::fs::read_to_string(store.users_path()).unwrap();
        let reservations = std::fs::read_to_string(store.reservations_path()).unwrap();
        assert_eq!(users, "[]");
        assert_eq!(reservations, "[]");
    }

    #[tokio::test]
    async fn test_init_keeps_existing_documents() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path(), "users.json", "reservations.json");
        let user = User::new(
            "u1".to_string(),
            "Alice".to_string(),
            String::new(),
            String::new(),
            Role::Trainee,
        );
        store.save_users(&[user.clone()]).await.unwrap();

        store.init().await.unwrap();

        assert_eq!(store.load_users().await, vec![user]);
    }

    #[tokio::test]
    async fn test_missing_document_reads_as_empty() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path(), "users.json", "reservations.json");

        assert!(store.load_users().await.is_empty());
        assert!(store.load_reservations().await.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_document_reads_as_empty() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path(), "users.json", "reservations.json");
        std::fs::write(store.users_path(), "{ not json").unwrap();

        assert!(store.load_users().await.is_empty());
    }

    #[tokio::test]
    async fn test_write_is_pretty_printed_camel_case() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path(), "users.json", "reservations.json");
        let user = User::new(
            "u1".to_string(),
            "Alice".to_string(),
            "a@x.com".to_string(),
            String::new(),
            Role::Trainer,
        );

        store.save_users(&[user]).await.unwrap();

        let text = std::fs::read_to_string(store.users_path()).unwrap();
        assert!(text.contains('\n'));
        assert!(text.contains("\"createdAt\""));
        assert!(text.contains("\"role\": \"trainer\""));
    }
}
