use std::collections::BTreeMap;

use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;

use crate::application::ports::{BackendError, FileShare, ShareItem};
use crate::domain::errors::DomainError;
use crate::domain::resources::ResourceKind;

#[derive(Debug, Clone)]
enum ShareEntry {
    File(Bytes),
    Directory,
}

/// File share keeping the root directory in memory, listed in name order
#[derive(Default)]
pub struct InMemoryFileShare {
    shares: DashMap<String, BTreeMap<String, ShareEntry>>,
}

impl InMemoryFileShare {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty sub-directory to the share root
    pub fn create_directory(&self, share: &str, name: &str) -> Result<(), BackendError> {
        let mut entries = self
            .shares
            .get_mut(share)
            .ok_or_else(|| BackendError::NotFound(format!("share {}", share)))?;
        entries.insert(name.to_string(), ShareEntry::Directory);
        Ok(())
    }

    /// Content of a file in the share root
    pub fn read_file(&self, share: &str, file_name: &str) -> Option<Bytes> {
        self.shares.get(share).and_then(|entries| match entries.get(file_name) {
            Some(ShareEntry::File(data)) => Some(data.clone()),
            _ => None,
        })
    }
}

#[async_trait]
impl FileShare for InMemoryFileShare {
    async fn create_share_if_not_exists(&self, share: &str) -> Result<(), BackendError> {
        ResourceKind::Share.validate(share)?;
        self.shares.entry(share.to_string()).or_default();
        Ok(())
    }

    async fn upload_file(
        &self,
        share: &str,
        file_name: &str,
        data: Bytes,
    ) -> Result<(), BackendError> {
        if file_name.is_empty() || file_name.contains(['/', '\\']) {
            return Err(DomainError::InvalidFileName(file_name.to_string()).into());
        }

        let mut entries = self
            .shares
            .get_mut(share)
            .ok_or_else(|| BackendError::NotFound(format!("share {}", share)))?;

        if matches!(entries.get(file_name), Some(ShareEntry::Directory)) {
            return Err(BackendError::Conflict(format!(
                "{} is a directory",
                file_name
            )));
        }
        entries.insert(file_name.to_string(), ShareEntry::File(data));
        Ok(())
    }

    async fn list_root(&self, share: &str) -> Result<Vec<ShareItem>, BackendError> {
        let entries = self
            .shares
            .get(share)
            .ok_or_else(|| BackendError::NotFound(format!("share {}", share)))?;

        Ok(entries
            .iter()
            .map(|(name, entry)| match entry {
                ShareEntry::File(data) => ShareItem {
                    name: name.clone(),
                    is_directory: false,
                    size_bytes: Some(data.len() as u64),
                },
                ShareEntry::Directory => ShareItem {
                    name: name.clone(),
                    is_directory: true,
                    size_bytes: None,
                },
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_overwrite_keeps_single_entry() {
        let share = InMemoryFileShare::new();
        share.create_share_if_not_exists("contracts").await.unwrap();

        share
            .upload_file("contracts", "lease.pdf", Bytes::from_static(b"one"))
            .await
            .unwrap();
        share
            .upload_file("contracts", "lease.pdf", Bytes::from_static(b"two"))
            .await
            .unwrap();

        assert_eq!(share.list_root("contracts").await.unwrap().len(), 1);
        assert_eq!(
            share.read_file("contracts", "lease.pdf"),
            Some(Bytes::from_static(b"two"))
        );
    }

    #[tokio::test]
    async fn test_directories_are_listed_as_such() {
        let share = InMemoryFileShare::new();
        share.create_share_if_not_exists("contracts").await.unwrap();
        share.create_directory("contracts", "archive").unwrap();

        let items = share.list_root("contracts").await.unwrap();
        assert!(items[0].is_directory);
        assert_eq!(items[0].size_bytes, None);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_first_use_uploads() {
        let share = Arc::new(InMemoryFileShare::new());

        let mut handles = Vec::new();
        for i in 0..16 {
            let share = Arc::clone(&share);
            handles.push(tokio::spawn(async move {
                share.create_share_if_not_exists("contracts").await?;
                share
                    .upload_file("contracts", &format!("{}.pdf", i), Bytes::from_static(b"x"))
                    .await
            }));
        }
        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }

        assert_eq!(share.shares.len(), 1);
        assert_eq!(share.list_root("contracts").await.unwrap().len(), 16);
    }
}
