use std::sync::Arc;
use tracing::{error, info};

use crate::application::errors::ListError;
use crate::application::ports::FileShare;
use crate::domain::resources::CONTRACT_SHARE;

/// Use case: List contract file names
pub struct ListContractsUseCase {
    file_share: Arc<dyn FileShare>,
}

impl ListContractsUseCase {
    pub fn new(file_share: Arc<dyn FileShare>) -> Self {
        Self { file_share }
    }

    /// File names in the share's root directory; sub-directories are skipped
    pub async fn execute(&self) -> Result<Vec<String>, ListError> {
        info!("GetContracts triggered");

        let result = async {
            self.file_share
                .create_share_if_not_exists(CONTRACT_SHARE)
                .await?;
            self.file_share.list_root(CONTRACT_SHARE).await
        }
        .await;

        match result {
            Ok(items) => Ok(items
                .into_iter()
                .filter(|item| !item.is_directory)
                .map(|item| item.name)
                .collect()),
            Err(source) => {
                error!(error = %source, "Error retrieving contracts");
                Err(ListError {
                    target: "contracts",
                    source,
                })
            }
        }
    }
}
