use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entities::CustomerProfile;
use crate::domain::value_objects::MediaKind;

/// File received for upload
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub target_kind: MediaKind,
    pub file_name: String,
    pub content: Bytes,
    /// Length the client declared; must match `content`
    pub declared_length: u64,
}

impl UploadRequest {
    pub fn new(target_kind: MediaKind, file_name: impl Into<String>, content: Bytes) -> Self {
        let declared_length = content.len() as u64;
        Self {
            target_kind,
            file_name: file_name.into(),
            content,
            declared_length,
        }
    }

    /// Override the declared length with the one the client sent
    pub fn with_declared_length(mut self, declared_length: u64) -> Self {
        self.declared_length = declared_length;
        self
    }

    /// Request for which no file was received
    pub fn empty(target_kind: MediaKind) -> Self {
        Self::new(target_kind, String::new(), Bytes::new())
    }
}

/// Uniform outcome of a write operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub success: bool,
    pub message: String,
    /// Locator of the stored item; only the object store exposes one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl UploadResult {
    pub fn succeeded(message: impl Into<String>, url: Option<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            url,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            url: None,
        }
    }
}

/// Form fields submitted to create a customer
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct NewCustomer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// DTO for customer profile responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub partition_key: String,
    pub row_key: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl From<CustomerProfile> for CustomerDto {
    fn from(profile: CustomerProfile) -> Self {
        Self {
            partition_key: profile.partition_key().to_string(),
            row_key: profile.row_key().to_string(),
            name: profile.name().to_string(),
            email: profile.email().to_string(),
            phone: profile.phone().to_string(),
            timestamp: profile.timestamp(),
        }
    }
}

/// Cross-backend usage counts, computed fresh per request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StorageStatsReport {
    pub customer_count: u64,
    pub image_count: u64,
    /// Reported by the queue backend; may be approximate
    pub queue_message_count: u64,
    pub contract_count: u64,
    pub generated_at: DateTime<Utc>,
}
