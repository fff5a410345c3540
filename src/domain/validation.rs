//! Upload policy enforcement and form field checks
//!
//! Every check here runs before any backend is contacted. Failures are
//! returned as values so callers can turn them into structured responses.

use thiserror::Error;

use crate::domain::errors::DomainError;
use crate::domain::value_objects::UploadPolicy;

/// Validation result type
pub type ValidationResult<T> = Result<T, DomainError>;

/// Reason an upload candidate was refused by its policy
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyViolation {
    #[error("No file uploaded or file is empty.")]
    Empty,

    #[error("Invalid file type. Please upload {type_hint}.")]
    InvalidType { type_hint: &'static str },

    #[error("File size must be less than {limit}.")]
    TooLarge { limit: String, size: u64 },
}

/// Extension of `file_name` without the leading dot.
///
/// Only the final path segment is considered. A bare dot-name such as
/// ".png" counts as having the extension "png".
pub fn file_extension(file_name: &str) -> Option<&str> {
    let base = file_name
        .rsplit(&['/', '\\'][..])
        .next()
        .unwrap_or(file_name);

    match base.rfind('.') {
        Some(idx) if idx + 1 < base.len() => Some(&base[idx + 1..]),
        _ => None,
    }
}

impl UploadPolicy {
    /// Check a candidate file against this policy.
    ///
    /// Order: empty payload, then extension, then size. The size ceiling is
    /// inclusive: a file exactly at the limit passes.
    pub fn check(&self, file_name: &str, length: u64) -> Result<(), PolicyViolation> {
        if file_name.is_empty() || length == 0 {
            return Err(PolicyViolation::Empty);
        }

        let allowed = file_extension(file_name)
            .map(|ext| self.allows_extension(ext))
            .unwrap_or(false);
        if !allowed {
            return Err(PolicyViolation::InvalidType {
                type_hint: self.type_hint(),
            });
        }

        if length > self.max_bytes() {
            return Err(PolicyViolation::TooLarge {
                limit: self.size_label(),
                size: length,
            });
        }

        Ok(())
    }
}

/// Common validation utilities
pub struct Validation;

impl Validation {
    /// Require a present, non-blank form field and return it
    pub fn require_field<'a>(value: Option<&'a str>, field_name: &str) -> ValidationResult<&'a str> {
        match value {
            Some(v) if !v.trim().is_empty() => Ok(v),
            Some(_) => Err(DomainError::ValidationError {
                field: field_name.to_string(),
                message: "Field cannot be empty".to_string(),
            }),
            None => Err(DomainError::ValidationError {
                field: field_name.to_string(),
                message: "Field is required".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIB: u64 = 1024 * 1024;

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("photo.PNG"), Some("PNG"));
        assert_eq!(file_extension("archive.tar.gz"), Some("gz"));
        assert_eq!(file_extension("dir.v2/readme"), None);
        assert_eq!(file_extension(".png"), Some("png"));
        assert_eq!(file_extension("trailing."), None);
        assert_eq!(file_extension("noext"), None);
    }

    #[test]
    fn test_image_rejects_text_file() {
        let result = UploadPolicy::IMAGE.check("notes.txt", 10);
        let err = result.unwrap_err();
        assert!(matches!(err, PolicyViolation::InvalidType { .. }));
        assert!(err.to_string().contains("Invalid file type"));
    }

    #[test]
    fn test_image_size_boundary() {
        assert!(UploadPolicy::IMAGE.check("shoe.png", 10 * MIB).is_ok());

        let err = UploadPolicy::IMAGE.check("shoe.png", 10 * MIB + 1).unwrap_err();
        assert_eq!(err.to_string(), "File size must be less than 10MB.");
    }

    #[test]
    fn test_document_size_boundary() {
        assert!(UploadPolicy::DOCUMENT.check("lease.pdf", 100 * MIB).is_ok());
        assert!(matches!(
            UploadPolicy::DOCUMENT.check("lease.pdf", 100 * MIB + 1),
            Err(PolicyViolation::TooLarge { .. })
        ));
    }

    #[test]
    fn test_empty_payload_reported_before_type() {
        assert_eq!(
            UploadPolicy::IMAGE.check("notes.txt", 0),
            Err(PolicyViolation::Empty)
        );
        assert_eq!(
            PolicyViolation::Empty.to_string(),
            "No file uploaded or file is empty."
        );
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        assert!(UploadPolicy::IMAGE.check("SHOE.JPEG", 1).is_ok());
        assert!(UploadPolicy::DOCUMENT.check("Q3.XlSx", 1).is_ok());
    }

    #[test]
    fn test_document_type_message() {
        let err = UploadPolicy::DOCUMENT.check("virus.exe", 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid file type. Please upload PDF, Word, Excel, PowerPoint, or Text files."
        );
    }

    #[test]
    fn test_require_field() {
        assert_eq!(Validation::require_field(Some("Ada"), "name").unwrap(), "Ada");
        assert!(Validation::require_field(Some("   "), "name").is_err());
        assert!(Validation::require_field(None, "name").is_err());
    }
}
