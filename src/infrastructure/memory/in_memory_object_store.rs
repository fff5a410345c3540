use std::collections::BTreeMap;

use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;

use crate::application::ports::{BackendError, ObjectItem, ObjectStore};
use crate::domain::resources::ResourceKind;
use crate::infrastructure::storage::ContentHasher;

#[derive(Debug, Clone)]
struct StoredObject {
    data: Bytes,
    etag: String,
}

/// Object store keeping blobs in memory, listed in key order
pub struct InMemoryObjectStore {
    containers: DashMap<String, BTreeMap<String, StoredObject>>,
    public_base_url: String,
}

impl InMemoryObjectStore {
    pub fn new(public_base_url: impl Into<String>) -> Self {
        Self {
            containers: DashMap::new(),
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url_for(&self, container: &str, key: &str) -> String {
        format!(
            "{}/{}/{}",
            self.public_base_url,
            container,
            urlencoding::encode(key)
        )
    }

    /// Content of a stored blob
    pub fn get_object(&self, container: &str, key: &str) -> Option<Bytes> {
        self.containers
            .get(container)
            .and_then(|objects| objects.get(key).map(|o| o.data.clone()))
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    async fn create_container_if_not_exists(&self, container: &str) -> Result<(), BackendError> {
        ResourceKind::Container.validate(container)?;
        self.containers.entry(container.to_string()).or_default();
        Ok(())
    }

    async fn put_object(
        &self,
        container: &str,
        key: &str,
        data: Bytes,
    ) -> Result<ObjectItem, BackendError> {
        if key.is_empty() {
            return Err(BackendError::Internal("object key cannot be empty".to_string()));
        }

        let mut objects = self
            .containers
            .get_mut(container)
            .ok_or_else(|| BackendError::NotFound(format!("container {}", container)))?;

        let etag = ContentHasher::hash_bytes(&data);
        let size_bytes = data.len() as u64;
        objects.insert(
            key.to_string(),
            StoredObject {
                data,
                etag: etag.clone(),
            },
        );

        Ok(ObjectItem {
            name: key.to_string(),
            url: self.url_for(container, key),
            size_bytes,
            etag: Some(etag),
        })
    }

    async fn list_objects(&self, container: &str) -> Result<Vec<ObjectItem>, BackendError> {
        let objects = self
            .containers
            .get(container)
            .ok_or_else(|| BackendError::NotFound(format!("container {}", container)))?;

        Ok(objects
            .iter()
            .map(|(key, object)| ObjectItem {
                name: key.clone(),
                url: self.url_for(container, key),
                size_bytes: object.data.len() as u64,
                etag: Some(object.etag.clone()),
            })
            .collect())
    }
}
