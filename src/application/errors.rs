//! Error types returned by the use cases
//!
//! Upload and list failures carry their full detail so callers can show it.
//! Queue and customer failures keep request-shape problems apart from
//! backend failures, which callers report without detail.

use thiserror::Error;

use crate::application::ports::BackendError;
use crate::domain::errors::DomainError;
use crate::domain::validation::PolicyViolation;

/// Error type for the upload use cases
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Rejected(#[from] PolicyViolation),

    #[error("Error uploading {target}: {source}")]
    Backend {
        target: &'static str,
        #[source]
        source: BackendError,
    },
}

/// Error type for the list use cases
#[derive(Debug, Error)]
#[error("Error retrieving {target}: {source}")]
pub struct ListError {
    pub target: &'static str,
    #[source]
    pub source: BackendError,
}

/// Error type for sending queue messages
#[derive(Debug, Error)]
pub enum QueueError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Queue error: {0}")]
    Backend(#[from] BackendError),
}

/// Error type for customer use cases
#[derive(Debug, Error)]
pub enum CustomerError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Table error: {0}")]
    Backend(#[from] BackendError),
}

/// Backend queried by the stats aggregator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsSource {
    Customers,
    Images,
    Queue,
    Contracts,
}

impl std::fmt::Display for StatsSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsSource::Customers => write!(f, "customers"),
            StatsSource::Images => write!(f, "images"),
            StatsSource::Queue => write!(f, "queue"),
            StatsSource::Contracts => write!(f, "contracts"),
        }
    }
}

/// Aggregation failure: one entry per backend that failed
#[derive(Debug, Error)]
#[error("{}", describe_failures(.failures))]
pub struct StatsError {
    pub failures: Vec<(StatsSource, BackendError)>,
}

fn describe_failures(failures: &[(StatsSource, BackendError)]) -> String {
    failures
        .iter()
        .map(|(source, err)| format!("{}: {}", source, err))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_backend_error_names_target() {
        let err = UploadError::Backend {
            target: "image",
            source: BackendError::Internal("disk full".to_string()),
        };
        assert_eq!(err.to_string(), "Error uploading image: Internal error: disk full");
    }

    #[test]
    fn test_upload_rejection_is_transparent() {
        let err: UploadError = PolicyViolation::Empty.into();
        assert_eq!(err.to_string(), "No file uploaded or file is empty.");
    }

    #[test]
    fn test_list_error_display() {
        let err = ListError {
            target: "contracts",
            source: BackendError::NotFound("contracts".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Error retrieving contracts: Resource not found: contracts"
        );
    }

    #[test]
    fn test_stats_error_combines_every_failure() {
        let err = StatsError {
            failures: vec![
                (StatsSource::Queue, BackendError::Internal("down".to_string())),
                (StatsSource::Contracts, BackendError::NotFound("contracts".to_string())),
            ],
        };
        assert_eq!(
            err.to_string(),
            "queue: Internal error: down; contracts: Resource not found: contracts"
        );
    }

    #[test]
    fn test_customer_error_from_backend() {
        let err: CustomerError = BackendError::Conflict("row".to_string()).into();
        assert!(matches!(err, CustomerError::Backend(_)));
    }
}
