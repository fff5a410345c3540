use std::path::PathBuf;

use tokio::fs::{self, File};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::application::ports::BackendError;
use crate::domain::resources::ResourceKind;
use crate::infrastructure::storage::{ContentHasher, PathBuilder};

/// Entry found while listing a resource directory
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub name: String,
    pub is_directory: bool,
    pub size_bytes: u64,
}

/// Directory tree shared by the filesystem-backed adapters.
///
/// Each container or share is one directory under the root. Writes are
/// staged in a temp file and renamed into place so readers never observe a
/// partial file.
#[derive(Debug, Clone)]
pub struct LocalRoot {
    path_builder: PathBuilder,
    durable_writes: bool,
}

impl LocalRoot {
    pub fn new(root: PathBuf) -> Self {
        Self::with_durability(root, true)
    }

    pub fn with_durability(root: PathBuf, durable_writes: bool) -> Self {
        Self {
            path_builder: PathBuilder::new(root),
            durable_writes,
        }
    }

    /// Initialize the root and staging directories
    pub async fn init(&self) -> Result<(), BackendError> {
        fs::create_dir_all(self.path_builder.staging_dir()).await?;
        Ok(())
    }

    pub async fn create_resource_if_not_exists(
        &self,
        kind: ResourceKind,
        name: &str,
    ) -> Result<(), BackendError> {
        kind.validate(name)?;
        fs::create_dir_all(self.path_builder.resource_dir(name)).await?;
        Ok(())
    }

    async fn require_resource(&self, kind: ResourceKind, name: &str) -> Result<PathBuf, BackendError> {
        kind.validate(name)?;
        let dir = self.path_builder.resource_dir(name);
        match fs::metadata(&dir).await {
            Ok(meta) if meta.is_dir() => Ok(dir),
            Ok(_) => Err(BackendError::NotFound(format!("{} {}", kind, name))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(BackendError::NotFound(format!("{} {}", kind, name)))
            }
            Err(e) => Err(BackendError::Io(e)),
        }
    }

    /// Atomically write `data` as `name` inside the resource, replacing any
    /// existing file. Returns the ETag and size written.
    pub async fn write_entry(
        &self,
        kind: ResourceKind,
        resource: &str,
        name: &str,
        data: &[u8],
    ) -> Result<(String, u64), BackendError> {
        self.require_resource(kind, resource).await?;
        let final_path = self.path_builder.entry_path(resource, name)?;

        // Staging dir may have been removed since init
        fs::create_dir_all(self.path_builder.staging_dir()).await?;
        let temp_path = self.path_builder.temp_path(Uuid::new_v4());

        debug!("Staging write at {:?}", temp_path);
        let written = match ContentHasher::write_and_hash(&temp_path, data, self.durable_writes).await
        {
            Ok(written) => written,
            Err(e) => {
                warn!("Failed to stage write {:?}: {}", temp_path, e);
                let _ = fs::remove_file(&temp_path).await;
                return Err(e);
            }
        };

        if let Err(e) = fs::rename(&temp_path, &final_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(BackendError::Io(e));
        }

        if self.durable_writes {
            if let Some(parent) = final_path.parent() {
                match File::open(parent).await {
                    Ok(dir) => {
                        if let Err(e) = dir.sync_all().await {
                            warn!("Failed to sync directory after rename: {}", e);
                        }
                    }
                    Err(e) => warn!("Failed to open directory for sync: {}", e),
                }
            }
        }

        Ok(written)
    }

    /// Immediate children of the resource directory, sorted by name
    pub async fn list_entries(
        &self,
        kind: ResourceKind,
        resource: &str,
    ) -> Result<Vec<DirEntry>, BackendError> {
        let dir = self.require_resource(kind, resource).await?;
        let mut read_dir = fs::read_dir(&dir).await?;
        let mut entries = Vec::new();

        while let Some(entry) = read_dir.next_entry().await? {
            let Ok(name) = entry.file_name().into_string() else {
                warn!("Skipping non UTF-8 entry in {:?}", dir);
                continue;
            };
            let meta = entry.metadata().await?;
            entries.push(DirEntry {
                name,
                is_directory: meta.is_dir(),
                size_bytes: if meta.is_dir() { 0 } else { meta.len() },
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}
