//! Shared test fixtures for the HTTP tests
//!
//! Builds the full router over in-memory backends and keeps typed handles
//! to those backends so tests can inspect what was stored.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use serde_json::Value;

use retail_gateway::api::create_router;
use retail_gateway::application::builder::ApplicationBuilder;
use retail_gateway::application::ports::{BackendError, MessageQueue, QueueProperties};
use retail_gateway::infrastructure::memory::{
    InMemoryFileShare, InMemoryMessageQueue, InMemoryObjectStore, InMemoryRecordTable,
};
use retail_gateway::Config;

pub const BOUNDARY: &str = "----gateway-test-boundary";
pub const MIB: usize = 1024 * 1024;

/// Router plus direct handles to its backends
pub struct TestApp {
    pub router: Router,
    pub object_store: Arc<InMemoryObjectStore>,
    pub file_share: Arc<InMemoryFileShare>,
    pub queue: Arc<InMemoryMessageQueue>,
    pub table: Arc<InMemoryRecordTable>,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_queue(None).await
    }

    /// Same as `new`, but with the queue replaced by `queue` when given
    pub async fn with_queue(queue: Option<Arc<dyn MessageQueue>>) -> Self {
        let object_store = Arc::new(InMemoryObjectStore::new("http://localhost:8080/blobs"));
        let file_share = Arc::new(InMemoryFileShare::new());
        let memory_queue = Arc::new(InMemoryMessageQueue::new());
        let table = Arc::new(InMemoryRecordTable::new());

        let queue_port: Arc<dyn MessageQueue> = match queue {
            Some(queue) => queue,
            None => memory_queue.clone(),
        };

        let state = ApplicationBuilder::new(Config::in_memory())
            .with_object_store(object_store.clone())
            .with_file_share(file_share.clone())
            .with_message_queue(queue_port)
            .with_record_table(table.clone())
            .build()
            .expect("Failed to build application state");

        Self {
            router: create_router(state),
            object_store,
            file_share,
            queue: memory_queue,
            table,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        tower::ServiceExt::oneshot(self.router.clone(), request)
            .await
            .expect("Router failed")
    }
}

/// Queue whose every call fails
pub struct UnavailableQueue;

#[async_trait]
impl MessageQueue for UnavailableQueue {
    async fn create_queue_if_not_exists(&self, _queue: &str) -> Result<(), BackendError> {
        Err(BackendError::Internal("queue offline".to_string()))
    }

    async fn send_message(&self, _queue: &str, _body: &str) -> Result<String, BackendError> {
        Err(BackendError::Internal("queue offline".to_string()))
    }

    async fn get_properties(&self, _queue: &str) -> Result<QueueProperties, BackendError> {
        Err(BackendError::Internal("queue offline".to_string()))
    }
}

/// Multipart request carrying one file field
pub fn multipart_upload(uri: &str, field: &str, file_name: &str, content: &[u8]) -> Request<Body> {
    multipart_upload_declaring(uri, field, file_name, content, None)
}

/// Multipart file upload whose part optionally declares its own length
pub fn multipart_upload_declaring(
    uri: &str,
    field: &str,
    file_name: &str,
    content: &[u8],
    declared_length: Option<u64>,
) -> Request<Body> {
    let length_header = declared_length
        .map(|length| format!("Content-Length: {length}\r\n"))
        .unwrap_or_default();
    let mut body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n{length_header}\r\n"
    )
    .into_bytes();
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Multipart request carrying text fields only
pub fn multipart_fields(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));

    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

/// URL-encoded form request
pub fn form_post(uri: &str, encoded_body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(encoded_body.to_string()))
        .unwrap()
}

/// JSON request, a body type the form endpoints do not accept
pub fn json_post(uri: &str, json: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body")
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("Response body is not JSON")
}
