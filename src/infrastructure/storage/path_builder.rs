use std::path::PathBuf;

use uuid::Uuid;

use crate::domain::errors::DomainError;

/// Directory name for in-flight writes; lives under the root so the final
/// rename never crosses a filesystem boundary
const STAGING_DIR: &str = ".staging";

/// Utility for generating storage paths under one root directory
#[derive(Debug, Clone)]
pub struct PathBuilder {
    root: PathBuf,
}

impl PathBuilder {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Directory backing a container or share: /root/{resource}
    pub fn resource_dir(&self, resource: &str) -> PathBuf {
        self.root.join(resource)
    }

    /// Generate temp upload path: /root/.staging/{uuid}
    pub fn temp_path(&self, id: Uuid) -> PathBuf {
        self.root.join(STAGING_DIR).join(id.to_string())
    }

    pub fn staging_dir(&self) -> PathBuf {
        self.root.join(STAGING_DIR)
    }

    /// Final path of an entry: /root/{resource}/{name}.
    ///
    /// `name` must be a single path segment.
    pub fn entry_path(&self, resource: &str, name: &str) -> Result<PathBuf, DomainError> {
        check_segment(name)?;
        Ok(self.resource_dir(resource).join(name))
    }
}

fn check_segment(name: &str) -> Result<(), DomainError> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);

    if invalid {
        return Err(DomainError::InvalidFileName(format!(
            "{:?} is not a valid entry name",
            name
        )));
    }
    Ok(())
}
