//! Uploaded file storage over `object_store`.
//!
//! Files are written under a kind-specific prefix with a random name and served back
//! through `/files/{*key}`. Production uses the local filesystem, tests an in-memory
//! store.

use std::sync::Arc;

use axum::body::Bytes;
use dioxus_logger::tracing;
use object_store::{path::Path, ObjectStore, PutPayload};
use uuid::Uuid;

use crate::server::error::AppError;

/// Route prefix under which stored objects are served.
pub const FILES_ROUTE: &str = "/files";

/// Largest accepted upload body.
pub const MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Screenshot,
    Livery,
}

impl UploadKind {
    fn prefix(&self) -> &'static str {
        match self {
            Self::Screenshot => "screenshots",
            Self::Livery => "liveries",
        }
    }

    /// Whether `key` was issued for this kind by [`UploadKind::new_key`].
    pub fn owns_key(&self, key: &str) -> bool {
        key.strip_prefix(self.prefix())
            .and_then(|rest| rest.strip_prefix('/'))
            .is_some_and(|name| !name.is_empty() && !name.contains('/'))
    }

    fn default_extension(&self) -> &'static str {
        match self {
            Self::Screenshot => "jpg",
            Self::Livery => "zip",
        }
    }

    /// Builds a fresh storage key, keeping a sane extension from the client file name.
    pub fn new_key(&self, file_name: Option<&str>) -> String {
        let extension = file_name
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| {
                !ext.is_empty()
                    && ext.len() <= 10
                    && ext.chars().all(|c| c.is_ascii_alphanumeric())
            })
            .unwrap_or_else(|| self.default_extension().to_string());

        format!("{}/{}.{}", self.prefix(), Uuid::new_v4(), extension)
    }
}

/// Content type served for a stored key, derived from its extension.
pub fn content_type_for(key: &str) -> &'static str {
    let extension = key
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "zip" => "application/zip",
        "7z" => "application/x-7z-compressed",
        "rar" => "application/vnd.rar",
        _ => "application/octet-stream",
    }
}

/// A file written to storage.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredFile {
    pub key: String,
    /// Absolute public URL of the file.
    pub url: String,
}

#[derive(Clone)]
pub struct FileStorage {
    store: Arc<dyn ObjectStore>,
    /// `<APP_URL>/files`
    public_base: String,
}

impl FileStorage {
    pub fn new(store: Arc<dyn ObjectStore>, app_url: &str) -> Self {
        Self {
            store,
            public_base: format!("{}{}", app_url.trim_end_matches('/'), FILES_ROUTE),
        }
    }

    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base, key)
    }

    /// Reverses [`FileStorage::public_url`] for URLs that point at this store.
    pub fn key_from_url(&self, url: &str) -> Option<String> {
        url.strip_prefix(&self.public_base)
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|key| !key.is_empty())
            .map(str::to_string)
    }

    /// Key of a URL served by this store under the given kind's prefix.
    pub fn key_of_kind(&self, url: &str, kind: UploadKind) -> Option<String> {
        self.key_from_url(url).filter(|key| kind.owns_key(key))
    }

    pub async fn upload(
        &self,
        kind: UploadKind,
        file_name: Option<&str>,
        data: Bytes,
    ) -> Result<StoredFile, AppError> {
        let key = kind.new_key(file_name);

        self.store
            .put(&Path::from(key.as_str()), PutPayload::from(data))
            .await?;

        Ok(StoredFile {
            url: self.public_url(&key),
            key,
        })
    }

    /// Reads a stored object.
    ///
    /// # Returns
    /// - `Ok((Bytes, content_type))` - Object contents
    /// - `Err(AppError::NotFound)` - Key is malformed or nothing is stored under it
    pub async fn get(&self, key: &str) -> Result<(Bytes, &'static str), AppError> {
        let path =
            Path::parse(key).map_err(|_| AppError::NotFound("File not found".to_string()))?;

        let data = self.store.get(&path).await?.bytes().await?;

        Ok((data, content_type_for(key)))
    }

    pub async fn delete(&self, key: &str) -> Result<(), AppError> {
        self.store.delete(&Path::from(key)).await?;

        Ok(())
    }

    /// Deletes the given keys, logging failures instead of returning them.
    pub async fn delete_best_effort(&self, keys: impl IntoIterator<Item = String>) {
        for key in keys {
            if let Err(e) = self.delete(&key).await {
                tracing::warn!("Failed to delete stored file {}: {}", key, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use object_store::memory::InMemory;

    use super::*;

    fn storage() -> FileStorage {
        FileStorage::new(Arc::new(InMemory::new()), "http://localhost:8080/")
    }

    #[test]
    fn keys_keep_extension_or_fall_back() {
        let key = UploadKind::Screenshot.new_key(Some("Cockpit.PNG"));
        assert!(key.starts_with("screenshots/"));
        assert!(key.ends_with(".png"));

        assert!(UploadKind::Screenshot.new_key(None).ends_with(".jpg"));
        assert!(UploadKind::Livery.new_key(Some("README")).ends_with(".zip"));
        assert!(UploadKind::Livery
            .new_key(Some("evil.z/../ip"))
            .ends_with(".zip"));
    }

    #[test]
    fn content_type_follows_extension() {
        assert_eq!(content_type_for("screenshots/a.jpeg"), "image/jpeg");
        assert_eq!(content_type_for("liveries/a.zip"), "application/zip");
        assert_eq!(content_type_for("liveries/a"), "application/octet-stream");
    }

    #[tokio::test]
    async fn upload_then_get_and_delete() {
        let storage = storage();

        let stored = storage
            .upload(
                UploadKind::Livery,
                Some("korean-air.zip"),
                Bytes::from_static(b"PK"),
            )
            .await
            .unwrap();
        assert_eq!(
            stored.url,
            format!("http://localhost:8080/files/{}", stored.key)
        );
        assert_eq!(storage.key_from_url(&stored.url), Some(stored.key.clone()));

        let (data, content_type) = storage.get(&stored.key).await.unwrap();
        assert_eq!(data.as_ref(), b"PK");
        assert_eq!(content_type, "application/zip");

        storage.delete(&stored.key).await.unwrap();
        assert!(matches!(
            storage.get(&stored.key).await,
            Err(AppError::StorageErr(object_store::Error::NotFound { .. }))
        ));
    }

    #[test]
    fn foreign_urls_have_no_key() {
        let storage = storage();

        assert_eq!(storage.key_from_url("https://cdn.example.com/a.jpg"), None);
        assert_eq!(storage.key_from_url("http://localhost:8080/files/"), None);
    }

    #[test]
    fn keys_are_checked_against_their_kind() {
        let storage = storage();

        assert!(UploadKind::Livery.owns_key("liveries/a.zip"));
        assert!(!UploadKind::Livery.owns_key("screenshots/a.jpg"));
        assert!(!UploadKind::Livery.owns_key("liveries/"));
        assert!(!UploadKind::Livery.owns_key("liveries/../screenshots/a.jpg"));

        assert_eq!(
            storage.key_of_kind(
                "http://localhost:8080/files/screenshots/a.jpg",
                UploadKind::Screenshot
            ),
            Some("screenshots/a.jpg".to_string())
        );
        assert_eq!(
            storage.key_of_kind(
                "http://localhost:8080/files/liveries/a.zip",
                UploadKind::Screenshot
            ),
            None
        );
    }
}
