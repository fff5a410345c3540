use axum::{extract::State, response::Json};
use std::sync::Arc;
use utoipa::ToSchema;

use super::form::FormFields;
use crate::api::errors::ApiError;
use crate::application::dto::UploadResult;
use crate::application::use_cases::SendOrderMessageUseCase;

/// Form body of a queue message
#[derive(ToSchema)]
pub struct QueueMessageForm {
    /// Sent verbatim
    pub message: String,
}

/// POST /api/queue/messages
/// Enqueue an order notification
#[utoipa::path(
    post,
    path = "/api/queue/messages",
    tag = "queue",
    request_body(content = QueueMessageForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Message enqueued", body = UploadResult),
        (status = 400, description = "Missing message or wrong content type", body = UploadResult),
        (status = 500, description = "Queue unavailable")
    )
)]
pub async fn send_queue_message_handler(
    State(use_case): State<Arc<SendOrderMessageUseCase>>,
    fields: FormFields,
) -> Result<Json<UploadResult>, ApiError> {
    let result = use_case.execute(fields.get("message")).await?;
    Ok(Json(result))
}
