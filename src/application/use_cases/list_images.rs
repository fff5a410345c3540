use std::sync::Arc;
use tracing::{error, info};

use crate::application::errors::ListError;
use crate::application::ports::ObjectStore;
use crate::domain::resources::IMAGE_CONTAINER;

/// Use case: List the URLs of every product image
pub struct ListImagesUseCase {
    object_store: Arc<dyn ObjectStore>,
}

impl ListImagesUseCase {
    pub fn new(object_store: Arc<dyn ObjectStore>) -> Self {
        Self { object_store }
    }

    /// Image URLs in the order the object store enumerates them
    pub async fn execute(&self) -> Result<Vec<String>, ListError> {
        info!("GetImages triggered");

        let result = async {
            self.object_store
                .create_container_if_not_exists(IMAGE_CONTAINER)
                .await?;
            self.object_store.list_objects(IMAGE_CONTAINER).await
        }
        .await;

        match result {
            Ok(items) => Ok(items.into_iter().map(|item| item.url).collect()),
            Err(source) => {
                error!(error = %source, "Error retrieving images");
                Err(ListError {
                    target: "images",
                    source,
                })
            }
        }
    }
}
