use std::sync::Arc;
use tracing::{error, info};

use crate::application::dto::UploadResult;
use crate::application::errors::QueueError;
use crate::application::ports::MessageQueue;
use crate::domain::resources::ORDER_QUEUE;

/// Use case: Enqueue an order notification
pub struct SendOrderMessageUseCase {
    queue: Arc<dyn MessageQueue>,
}

impl SendOrderMessageUseCase {
    pub fn new(queue: Arc<dyn MessageQueue>) -> Self {
        Self { queue }
    }

    /// Send `message` verbatim. Missing or empty text is rejected before the
    /// queue is contacted; any other content, whitespace included, is sent as-is.
    pub async fn execute(&self, message: Option<&str>) -> Result<UploadResult, QueueError> {
        info!("SendQueueMessage triggered");

        let message = match message {
            Some(text) if !text.is_empty() => text,
            _ => {
                return Err(QueueError::InvalidRequest(
                    "No message provided.".to_string(),
                ))
            }
        };

        self.queue
            .create_queue_if_not_exists(ORDER_QUEUE)
            .await
            .map_err(log_failure)?;

        let message_id = self
            .queue
            .send_message(ORDER_QUEUE, message)
            .await
            .map_err(log_failure)?;

        info!(message_id = %message_id, "Queue message sent: {}", message);

        Ok(UploadResult::succeeded(
            format!("Queue message sent: {}", message),
            None,
        ))
    }
}

fn log_failure(source: crate::application::ports::BackendError) -> QueueError {
    error!(error = %source, "Error sending queue message");
    QueueError::Backend(source)
}
