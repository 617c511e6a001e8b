//! # Flat-file stores
//!
//! Read-only JSON collections backing the menu and the credential list.
//!
//! Both files are deployment artifacts and are never written by this
//! service. They are re-read on every call, so edits take effect without a
//! restart. A missing file is a misconfiguration, not an empty store.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tokio::fs;

use crate::{
    error::AppError,
    models::{MenuItem, User},
};

pub async fn read_collection<T: DeserializeOwned>(
    path: &Path,
    name: &'static str,
) -> Result<Vec<T>, AppError> {
    let data = fs::read_to_string(path)
        .await
        .map_err(|source| AppError::StorageRead { name, source })?;

    serde_json::from_str(&data).map_err(|source| AppError::CorruptStore { name, source })
}

pub struct MenuStore {
    path: PathBuf,
}

impl MenuStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub async fn get_all(&self) -> Result<Vec<MenuItem>, AppError> {
        read_collection(&self.path, "menu").await
    }

    pub async fn get_by_id(&self, id: u32) -> Result<Option<MenuItem>, AppError> {
        let menu = self.get_all().await?;

        Ok(menu.into_iter().find(|item| item.id == id))
    }
}

pub struct UserDirectory {
    path: PathBuf,
}

impl UserDirectory {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, AppError> {
        let users: Vec<User> = read_collection(&self.path, "users").await?;

        Ok(users
            .into_iter()
            .find(|user| user.username == username && user.password == password))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    fn write_fixture(dir: &TempDir, file: &str, content: &str) -> PathBuf {
        let path = dir.path().join(file);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn test_menu_lookup_by_id() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "menu.json",
            r#"[{"id": 1, "name": "Tomato Soup", "price": 2.5}]"#,
        );
        let store = MenuStore::new(path);

        let item = store.get_by_id(1).await.unwrap().unwrap();
        assert_eq!(item.name, "Tomato Soup");

        assert!(store.get_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_store_file_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let store = MenuStore::new(dir.path().join("menu.json"));

        let err = store.get_all().await.unwrap_err();
        assert!(matches!(err, AppError::StorageRead { name: "menu", .. }));
    }

    #[tokio::test]
    async fn test_corrupt_store_file_is_surfaced() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "menu.json", "{not json");
        let store = MenuStore::new(path);

        let err = store.get_all().await.unwrap_err();
        assert!(matches!(err, AppError::CorruptStore { name: "menu", .. }));
    }

    #[tokio::test]
    async fn test_credentials_require_exact_match() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "user.json",
            &json!([
                { "userId": 7, "username": "alice", "password": "soup4life" }
            ])
            .to_string(),
        );
        let directory = UserDirectory::new(path);

        let user = directory
            .find_by_credentials("alice", "soup4life")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.user_id, json!(7));

        assert!(
            directory
                .find_by_credentials("alice", "wrong")
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            directory
                .find_by_credentials("Alice", "soup4life")
                .await
                .unwrap()
                .is_none()
        );
    }
}
