use async_trait::async_trait;
#[cfg(test)]
use mockall::{automock, predicate::*};
use serde::{Deserialize, Serialize};

use super::BackendError;

/// Queue metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueProperties {
    /// May lag behind concurrent sends
    pub approximate_message_count: u64,
}

/// Port for FIFO message transport
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MessageQueue: Send + Sync {
    /// Create the queue unless it already exists
    async fn create_queue_if_not_exists(&self, queue: &str) -> Result<(), BackendError>;

    /// Enqueue `body` as-is; the backend applies its own transport encoding.
    /// Returns the backend-assigned message id.
    async fn send_message(&self, queue: &str, body: &str) -> Result<String, BackendError>;

    async fn get_properties(&self, queue: &str) -> Result<QueueProperties, BackendError>;
}
