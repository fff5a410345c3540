use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use sqlx::PgPool;
use uuid::Uuid;

use crate::application::ports::{BackendError, MessageQueue, QueueProperties};
use crate::domain::resources::ResourceKind;

/// FIFO queue stored in PostgreSQL.
///
/// Bodies are base64 encoded at rest; callers always see the original text.
pub struct PostgresMessageQueue {
    pool: PgPool,
}

impl PostgresMessageQueue {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn require_queue(&self, queue: &str) -> Result<(), BackendError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM queues WHERE name = $1)")
            .bind(queue)
            .fetch_one(&self.pool)
            .await?;

        if exists {
            Ok(())
        } else {
            Err(BackendError::NotFound(format!("queue {}", queue)))
        }
    }

    /// Decoded bodies of the oldest `limit` messages, without dequeuing them
    pub async fn peek_messages(&self, queue: &str, limit: i64) -> Result<Vec<String>, BackendError> {
        self.require_queue(queue).await?;

        let encoded: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT body FROM queue_messages
            WHERE queue_name = $1
            ORDER BY seq
            LIMIT $2
            "#,
        )
        .bind(queue)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        encoded.iter().map(|body| decode_body(body)).collect()
    }
}

fn decode_body(encoded: &str) -> Result<String, BackendError> {
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| BackendError::Internal(format!("corrupt message body: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| BackendError::Internal(format!("corrupt message body: {}", e)))
}

#[async_trait]
impl MessageQueue for PostgresMessageQueue {
    async fn create_queue_if_not_exists(&self, queue: &str) -> Result<(), BackendError> {
        ResourceKind::Queue.validate(queue)?;

        sqlx::query("INSERT INTO queues (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
            .bind(queue)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn send_message(&self, queue: &str, body: &str) -> Result<String, BackendError> {
        self.require_queue(queue).await?;

        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO queue_messages (id, queue_name, body) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(queue)
            .bind(STANDARD.encode(body.as_bytes()))
            .execute(&self.pool)
            .await?;

        Ok(id.to_string())
    }

    async fn get_properties(&self, queue: &str) -> Result<QueueProperties, BackendError> {
        self.require_queue(queue).await?;

        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM queue_messages WHERE queue_name = $1")
                .bind(queue)
                .fetch_one(&self.pool)
                .await?;

        Ok(QueueProperties {
            approximate_message_count: count.max(0) as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_encoding_round_trip_keeps_markup() {
        let text = "<b>order</b> 42 — ünïcode";
        let encoded = STANDARD.encode(text.as_bytes());
        assert_eq!(decode_body(&encoded).unwrap(), text);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_body("not base64!!").is_err());
    }
}
