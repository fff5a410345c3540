//! Form body extraction shared by the handlers

use std::collections::HashMap;

use axum::{
    extract::{multipart::MultipartRejection, FromRequest, Multipart, Request},
    http::{
        header::{CONTENT_LENGTH, CONTENT_TYPE},
        HeaderMap,
    },
    Form,
};

use crate::api::errors::ApiError;
use crate::application::dto::UploadRequest;
use crate::domain::value_objects::MediaKind;

const URLENCODED: &str = "application/x-www-form-urlencoded";

fn content_type(headers: &HeaderMap) -> String {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// Text fields of a `multipart/form-data` or
/// `application/x-www-form-urlencoded` body.
///
/// When a field repeats, the first value wins.
#[derive(Debug, Default)]
pub struct FormFields(HashMap<String, String>);

impl FormFields {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn take(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }
}

impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = content_type(req.headers());

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|_| ApiError::invalid_content_type())?;
            read_text_fields(multipart).await
        } else if content_type.starts_with(URLENCODED) {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|e| ApiError::bad_request(e.body_text()))?;
            Ok(Self(fields))
        } else {
            Err(ApiError::invalid_content_type())
        }
    }
}

async fn read_text_fields(mut multipart: Multipart) -> Result<FormFields, ApiError> {
    let mut fields = HashMap::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed to read form data: {}", e)))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read form data: {}", e)))?;
        fields.entry(name).or_insert(value);
    }

    Ok(FormFields(fields))
}

/// Extract the file sent in `field_name`.
///
/// The declared length comes from the part's `Content-Length` header when
/// the client sent one. A missing field yields an empty request, which the
/// upload policy then rejects as empty. A URL-encoded form cannot carry
/// files, so it is treated the same way.
pub async fn extract_upload(
    headers: &HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
    field_name: &str,
    target_kind: MediaKind,
) -> Result<UploadRequest, ApiError> {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(_) if content_type(headers).starts_with(URLENCODED) => {
            return Ok(UploadRequest::empty(target_kind));
        }
        Err(_) => return Err(ApiError::invalid_content_type()),
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed to read multipart: {}", e)))?
    {
        if field.name() != Some(field_name) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let declared_length = field
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok());
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read file data: {}", e)))?;

        let request = UploadRequest::new(target_kind, file_name, data);
        return Ok(match declared_length {
            Some(declared) => request.with_declared_length(declared),
            None => request,
        });
    }

    Ok(UploadRequest::empty(target_kind))
}
