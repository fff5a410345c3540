use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    #[error("Invalid resource name: {0}")]
    InvalidResourceName(String),

    #[error("Invalid row key: {0}")]
    InvalidRowKey(String),

    #[error("Validation failed for {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("Entity is missing required property: {0}")]
    MissingProperty(String),
}
