//! Request checks shared by the use cases

use crate::application::dto::UploadRequest;
use crate::application::errors::UploadError;
use crate::domain::value_objects::{MediaKind, UploadPolicy};

/// Check request shape, then apply the policy of the target kind.
///
/// The request must target `expected` and its declared length must agree
/// with the received content before the policy sees it.
pub fn validate_upload(expected: MediaKind, request: &UploadRequest) -> Result<(), UploadError> {
    if request.target_kind != expected {
        return Err(UploadError::InvalidRequest(format!(
            "Expected a {} upload, got a {} upload",
            expected, request.target_kind
        )));
    }

    let actual = request.content.len() as u64;
    if request.declared_length != actual {
        return Err(UploadError::InvalidRequest(format!(
            "Declared length {} does not match received length {}",
            request.declared_length, actual
        )));
    }

    UploadPolicy::for_kind(request.target_kind).check(&request.file_name, actual)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn test_validate_upload_accepts_valid_image() {
        let request = UploadRequest::new(MediaKind::Image, "shoe.png", Bytes::from_static(b"png"));
        assert!(validate_upload(MediaKind::Image, &request).is_ok());
    }

    #[test]
    fn test_validate_upload_rejects_kind_mismatch() {
        let request =
            UploadRequest::new(MediaKind::Document, "lease.pdf", Bytes::from_static(b"%PDF"));

        let result = validate_upload(MediaKind::Image, &request);
        assert!(matches!(result, Err(UploadError::InvalidRequest(_))));
    }

    #[test]
    fn test_validate_upload_rejects_length_mismatch() {
        let request = UploadRequest::new(MediaKind::Image, "shoe.png", Bytes::from_static(b"png"))
            .with_declared_length(10);

        let result = validate_upload(MediaKind::Image, &request);
        assert!(matches!(result, Err(UploadError::InvalidRequest(_))));
    }

    #[test]
    fn test_validate_upload_uses_policy_of_target_kind() {
        let request =
            UploadRequest::new(MediaKind::Image, "notes.txt", Bytes::from_static(b"0123456789"));
        let result = validate_upload(MediaKind::Image, &request);
        assert!(matches!(result, Err(UploadError::Rejected(_))));

        let request =
            UploadRequest::new(MediaKind::Document, "notes.txt", Bytes::from_static(b"0123456789"));
        assert!(validate_upload(MediaKind::Document, &request).is_ok());
    }

    #[test]
    fn test_empty_request_is_rejected_as_empty() {
        let result =
            validate_upload(MediaKind::Document, &UploadRequest::empty(MediaKind::Document));
        assert!(matches!(
            result,
            Err(UploadError::Rejected(crate::domain::validation::PolicyViolation::Empty))
        ));
    }
}
