use async_trait::async_trait;
use bytes::Bytes;
#[cfg(test)]
use mockall::{automock, predicate::*};
use serde::{Deserialize, Serialize};

use super::BackendError;

/// Entry in a share's root directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareItem {
    pub name: String,
    pub is_directory: bool,
    /// Absent for directories
    pub size_bytes: Option<u64>,
}

/// Port for hierarchical file storage
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FileShare: Send + Sync {
    /// Create the share unless it already exists
    async fn create_share_if_not_exists(&self, share: &str) -> Result<(), BackendError>;

    /// Write `data` to `file_name` in the share's root directory.
    /// An existing file with the same name is replaced.
    async fn upload_file(&self, share: &str, file_name: &str, data: Bytes)
        -> Result<(), BackendError>;

    /// Enumerate files and directories in the share's root directory
    async fn list_root(&self, share: &str) -> Result<Vec<ShareItem>, BackendError>;
}
