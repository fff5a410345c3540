use async_trait::async_trait;
use bytes::Bytes;
use std::path::PathBuf;
use tracing::debug;

use crate::application::ports::{BackendError, FileShare, ShareItem};
use crate::domain::resources::ResourceKind;
use crate::infrastructure::storage::LocalRoot;

/// File share backed by one directory per share
pub struct LocalFileShare {
    root: LocalRoot,
}

impl LocalFileShare {
    pub fn new(root: PathBuf) -> Self {
        Self::with_root(LocalRoot::new(root))
    }

    pub fn with_root(root: LocalRoot) -> Self {
        Self { root }
    }

    pub async fn init(&self) -> Result<(), BackendError> {
        self.root.init().await
    }
}

#[async_trait]
impl FileShare for LocalFileShare {
    async fn create_share_if_not_exists(&self, share: &str) -> Result<(), BackendError> {
        self.root
            .create_resource_if_not_exists(ResourceKind::Share, share)
            .await
    }

    async fn upload_file(
        &self,
        share: &str,
        file_name: &str,
        data: Bytes,
    ) -> Result<(), BackendError> {
        let (_, size_bytes) = self
            .root
            .write_entry(ResourceKind::Share, share, file_name, &data)
            .await?;
        debug!(share, file_name, size_bytes, "File written");
        Ok(())
    }

    async fn list_root(&self, share: &str) -> Result<Vec<ShareItem>, BackendError> {
        let entries = self.root.list_entries(ResourceKind::Share, share).await?;
        Ok(entries
            .into_iter()
            .map(|entry| ShareItem {
                size_bytes: (!entry.is_directory).then_some(entry.size_bytes),
                name: entry.name,
                is_directory: entry.is_directory,
            })
            .collect())
    }
}
