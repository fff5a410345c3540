use std::sync::Arc;
use tracing::{error, info};

use crate::application::dto::{UploadRequest, UploadResult};
use crate::application::errors::UploadError;
use crate::application::ports::{BackendError, FileShare};
use crate::application::validation::validate_upload;
use crate::domain::naming::NamingStrategy;
use crate::domain::resources::CONTRACT_SHARE;
use crate::domain::value_objects::MediaKind;

/// Use case: Upload a contract document to the file share
///
/// Files keep their original name, so uploading a second file with the same
/// name replaces the first.
pub struct UploadContractUseCase {
    file_share: Arc<dyn FileShare>,
}

impl UploadContractUseCase {
    pub fn new(file_share: Arc<dyn FileShare>) -> Self {
        Self { file_share }
    }

    pub async fn execute(&self, request: UploadRequest) -> Result<UploadResult, UploadError> {
        info!(file_name = %request.file_name, "UploadContract triggered");

        validate_upload(MediaKind::Document, &request)?;

        self.file_share
            .create_share_if_not_exists(CONTRACT_SHARE)
            .await
            .map_err(backend_failure)?;

        let file_name = NamingStrategy::Verbatim
            .key_for(&request.file_name)
            .map_err(|e| UploadError::InvalidRequest(e.to_string()))?;

        self.file_share
            .upload_file(CONTRACT_SHARE, file_name.as_str(), request.content)
            .await
            .map_err(backend_failure)?;

        info!(file_name = %file_name, "Contract uploaded");

        // The file share exposes no public locator
        Ok(UploadResult::succeeded(
            format!("Contract {} uploaded successfully.", file_name),
            None,
        ))
    }
}

fn backend_failure(source: BackendError) -> UploadError {
    error!(error = %source, "Error uploading contract to file share");
    UploadError::Backend {
        target: "contract",
        source,
    }
}
