use async_trait::async_trait;
use bytes::Bytes;
use std::path::PathBuf;
use tracing::debug;

use crate::application::ports::{BackendError, ObjectItem, ObjectStore};
use crate::domain::resources::ResourceKind;
use crate::infrastructure::storage::LocalRoot;

/// Object store backed by one directory per container.
///
/// Object URLs are `{public_base_url}/{container}/{key}` with the key
/// percent-encoded.
pub struct LocalObjectStore {
    root: LocalRoot,
    public_base_url: String,
}

impl LocalObjectStore {
    pub fn new(root: PathBuf, public_base_url: impl Into<String>) -> Self {
        Self::with_root(LocalRoot::new(root), public_base_url)
    }

    pub fn with_root(root: LocalRoot, public_base_url: impl Into<String>) -> Self {
        let public_base_url = public_base_url.into().trim_end_matches('/').to_string();
        Self {
            root,
            public_base_url,
        }
    }

    pub async fn init(&self) -> Result<(), BackendError> {
        self.root.init().await
    }

    fn url_for(&self, container: &str, key: &str) -> String {
        format!(
            "{}/{}/{}",
            self.public_base_url,
            container,
            urlencoding::encode(key)
        )
    }
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    async fn create_container_if_not_exists(&self, container: &str) -> Result<(), BackendError> {
        self.root
            .create_resource_if_not_exists(ResourceKind::Container, container)
            .await
    }

    async fn put_object(
        &self,
        container: &str,
        key: &str,
        data: Bytes,
    ) -> Result<ObjectItem, BackendError> {
        let (etag, size_bytes) = self
            .root
            .write_entry(ResourceKind::Container, container, key, &data)
            .await?;

        debug!(container, key, size_bytes, "Object written");

        Ok(ObjectItem {
            name: key.to_string(),
            url: self.url_for(container, key),
            size_bytes,
            etag: Some(etag),
        })
    }

    async fn list_objects(&self, container: &str) -> Result<Vec<ObjectItem>, BackendError> {
        let entries = self
            .root
            .list_entries(ResourceKind::Container, container)
            .await?;

        // Names and metadata only; blob contents are never opened here
        Ok(entries
            .into_iter()
            .filter(|e| !e.is_directory)
            .map(|entry| ObjectItem {
                url: self.url_for(container, &entry.name),
                name: entry.name,
                size_bytes: entry.size_bytes,
                etag: None,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::ContentHasher;
    use tempfile::TempDir;

    async fn store(dir: &TempDir) -> LocalObjectStore {
        let store = LocalObjectStore::new(dir.path().to_path_buf(), "http://cdn.test/blobs/");
        store.init().await.unwrap();
        store
            .create_container_if_not_exists("product-images")
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_put_returns_url_and_etag() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir).await;

        let item = store
            .put_object("product-images", "abc_red shoe.png", Bytes::from_static(b"png"))
            .await
            .unwrap();

        assert_eq!(
            item.url,
            "http://cdn.test/blobs/product-images/abc_red%20shoe.png"
        );
        assert_eq!(item.size_bytes, 3);
        assert_eq!(item.etag, Some(ContentHasher::hash_bytes(b"png")));
    }

    #[tokio::test]
    async fn test_list_is_sorted_by_key() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir).await;

        for key in ["b.png", "a.png", "c.png"] {
            store
                .put_object("product-images", key, Bytes::from_static(b"x"))
                .await
                .unwrap();
        }

        let names: Vec<_> = store
            .list_objects("product-images")
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, vec!["a.png", "b.png", "c.png"]);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_list_reads_metadata_only() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir).await;

        store
            .put_object("product-images", "a.png", Bytes::from_static(b"png"))
            .await
            .unwrap();
        // An entry whose content cannot be opened must not break the listing
        std::os::unix::fs::symlink(
            dir.path().join("missing-target"),
            dir.path().join("product-images/zz_dangling.png"),
        )
        .unwrap();

        let items = store.list_objects("product-images").await.unwrap();
        let names: Vec<_> = items.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "zz_dangling.png"]);
        assert!(items.iter().all(|item| item.etag.is_none()));
        assert_eq!(items[0].size_bytes, 3);
    }

    #[tokio::test]
    async fn test_create_container_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir).await;
        store
            .create_container_if_not_exists("product-images")
            .await
            .unwrap();
        assert!(store.list_objects("product-images").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_put_rejects_path_traversal() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir).await;

        let result = store
            .put_object("product-images", "../outside.png", Bytes::from_static(b"x"))
            .await;
        assert!(matches!(result, Err(BackendError::Domain(_))));
    }
}
