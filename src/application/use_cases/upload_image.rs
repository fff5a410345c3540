use std::sync::Arc;
use tracing::{error, info};

use crate::application::dto::{UploadRequest, UploadResult};
use crate::application::errors::UploadError;
use crate::application::ports::ObjectStore;
use crate::application::validation::validate_upload;
use crate::domain::naming::NamingStrategy;
use crate::domain::resources::IMAGE_CONTAINER;
use crate::domain::value_objects::MediaKind;

/// Use case: Upload a product image to the object store
pub struct UploadImageUseCase {
    object_store: Arc<dyn ObjectStore>,
}

impl UploadImageUseCase {
    pub fn new(object_store: Arc<dyn ObjectStore>) -> Self {
        Self { object_store }
    }

    /// Execute upload workflow
    pub async fn execute(&self, request: UploadRequest) -> Result<UploadResult, UploadError> {
        info!(file_name = %request.file_name, "UploadImage triggered");

        // 1. Validate against the image policy
        validate_upload(MediaKind::Image, &request)?;

        // 2. Ensure the container exists
        self.object_store
            .create_container_if_not_exists(IMAGE_CONTAINER)
            .await
            .map_err(backend_failure)?;

        // 3. Unique key so same-named images never overwrite each other
        let key = NamingStrategy::UniquePrefix
            .key_for(&request.file_name)
            .map_err(|e| UploadError::InvalidRequest(e.to_string()))?;

        // 4. Write blob
        let stored = self
            .object_store
            .put_object(IMAGE_CONTAINER, key.as_str(), request.content)
            .await
            .map_err(backend_failure)?;

        info!(
            file_name = %request.file_name,
            url = %stored.url,
            etag = stored.etag.as_deref().unwrap_or_default(),
            "Image uploaded"
        );

        Ok(UploadResult::succeeded(
            format!("Image {} uploaded successfully.", request.file_name),
            Some(stored.url),
        ))
    }
}

fn backend_failure(source: crate::application::ports::BackendError) -> UploadError {
    error!(error = %source, "Error uploading image to object store");
    UploadError::Backend {
        target: "image",
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{BackendError, MockObjectStore, ObjectItem};
    use bytes::Bytes;

    fn stored(key: &str) -> ObjectItem {
        ObjectItem {
            name: key.to_string(),
            url: format!("http://localhost/blobs/product-images/{}", key),
            size_bytes: 3,
            etag: Some("e".repeat(64)),
        }
    }

    #[tokio::test]
    async fn test_upload_image_happy_path() {
        // Arrange
        let mut mock_store = MockObjectStore::new();
        mock_store
            .expect_create_container_if_not_exists()
            .withf(|container| container == "product-images")
            .times(1)
            .returning(|_| Ok(()));
        mock_store
            .expect_put_object()
            .withf(|container, key, data| {
                container == "product-images" && key.ends_with("_shoe.png") && data.len() == 3
            })
            .times(1)
            .returning(|_, key, _| Ok(stored(key)));

        let use_case = UploadImageUseCase::new(Arc::new(mock_store));

        // Act
        let result = use_case
            .execute(UploadRequest::new(MediaKind::Image, "shoe.png", Bytes::from_static(b"png")))
            .await
            .unwrap();

        // Assert
        assert!(result.success);
        assert_eq!(result.message, "Image shoe.png uploaded successfully.");
        assert!(result.url.unwrap().ends_with("_shoe.png"));
    }

    #[tokio::test]
    async fn test_upload_image_rejects_before_backend() {
        let mut mock_store = MockObjectStore::new();
        mock_store.expect_create_container_if_not_exists().times(0);
        mock_store.expect_put_object().times(0);

        let use_case = UploadImageUseCase::new(Arc::new(mock_store));
        let result = use_case
            .execute(UploadRequest::new(
                MediaKind::Image,
                "notes.txt",
                Bytes::from_static(b"0123456789"),
            ))
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, UploadError::Rejected(_)));
        assert!(err.to_string().contains("Invalid file type"));
    }

    #[tokio::test]
    async fn test_upload_image_backend_failure_carries_detail() {
        let mut mock_store = MockObjectStore::new();
        mock_store
            .expect_create_container_if_not_exists()
            .returning(|_| Ok(()));
        mock_store
            .expect_put_object()
            .returning(|_, _, _| Err(BackendError::Internal("disk full".to_string())));

        let use_case = UploadImageUseCase::new(Arc::new(mock_store));
        let err = use_case
            .execute(UploadRequest::new(MediaKind::Image, "shoe.png", Bytes::from_static(b"png")))
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Error uploading image: Internal error: disk full"
        );
    }
}
