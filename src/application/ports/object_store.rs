use async_trait::async_trait;
use bytes::Bytes;
#[cfg(test)]
use mockall::{automock, predicate::*};
use serde::{Deserialize, Serialize};

use super::BackendError;

/// Blob as reported by the object store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectItem {
    pub name: String,
    /// Full address of the blob
    pub url: String,
    pub size_bytes: u64,
    /// Hex SHA-256 of the blob content.
    ///
    /// Always set by `put_object`. Listings fill it only when the backend
    /// keeps it at hand, so counting never reads blob contents.
    pub etag: Option<String>,
}

/// Port for flat key-addressed blob storage
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Create the container unless it already exists
    async fn create_container_if_not_exists(&self, container: &str) -> Result<(), BackendError>;

    /// Store `data` under `key`, replacing any existing blob with that key
    async fn put_object(
        &self,
        container: &str,
        key: &str,
        data: Bytes,
    ) -> Result<ObjectItem, BackendError>;

    /// Enumerate every blob in the container in backend order
    async fn list_objects(&self, container: &str) -> Result<Vec<ObjectItem>, BackendError>;
}
