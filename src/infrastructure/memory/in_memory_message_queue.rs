use std::collections::VecDeque;

use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::application::ports::{BackendError, MessageQueue, QueueProperties};
use crate::domain::resources::ResourceKind;

#[derive(Debug, Clone)]
struct QueuedMessage {
    id: Uuid,
    body: String,
}

/// FIFO queue held in memory; the reported count is exact
#[derive(Default)]
pub struct InMemoryMessageQueue {
    queues: DashMap<String, Mutex<VecDeque<QueuedMessage>>>,
}

impl InMemoryMessageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bodies currently queued, oldest first, without removing them
    pub fn peek_all(&self, queue: &str) -> Vec<String> {
        self.queues
            .get(queue)
            .map(|messages| messages.lock().iter().map(|m| m.body.clone()).collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl MessageQueue for InMemoryMessageQueue {
    async fn create_queue_if_not_exists(&self, queue: &str) -> Result<(), BackendError> {
        ResourceKind::Queue.validate(queue)?;
        self.queues.entry(queue.to_string()).or_default();
        Ok(())
    }

    async fn send_message(&self, queue: &str, body: &str) -> Result<String, BackendError> {
        let messages = self
            .queues
            .get(queue)
            .ok_or_else(|| BackendError::NotFound(format!("queue {}", queue)))?;

        let message = QueuedMessage {
            id: Uuid::new_v4(),
            body: body.to_string(),
        };
        let id = message.id.to_string();
        messages.lock().push_back(message);
        Ok(id)
    }

    async fn get_properties(&self, queue: &str) -> Result<QueueProperties, BackendError> {
        let messages = self
            .queues
            .get(queue)
            .ok_or_else(|| BackendError::NotFound(format!("queue {}", queue)))?;

        let count = messages.lock().len() as u64;
        Ok(QueueProperties {
            approximate_message_count: count,
        })
    }
}
