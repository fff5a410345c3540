use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::HeaderMap,
    response::Json,
};
use std::sync::Arc;
use utoipa::ToSchema;

use super::form::extract_upload;
use crate::api::errors::ApiError;
use crate::application::dto::UploadResult;
use crate::domain::value_objects::MediaKind;
use crate::application::use_cases::{ListImagesUseCase, UploadImageUseCase};

/// Multipart body of an image upload
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ImageUploadForm {
    /// JPG, PNG, GIF, BMP or WebP image, at most 10MB
    #[schema(value_type = String, format = Binary)]
    pub image_file: Vec<u8>,
}

/// POST /api/images
/// Upload a product image under a unique name
#[utoipa::path(
    post,
    path = "/api/images",
    tag = "images",
    request_body(content = ImageUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image stored", body = UploadResult),
        (status = 400, description = "Rejected or failed upload", body = UploadResult)
    )
)]
pub async fn upload_image_handler(
    State(use_case): State<Arc<UploadImageUseCase>>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResult>, ApiError> {
    let request = extract_upload(&headers, multipart, "imageFile", MediaKind::Image).await?;
    let result = use_case.execute(request).await?;
    Ok(Json(result))
}

/// GET /api/images
/// List the URLs of every product image
#[utoipa::path(
    get,
    path = "/api/images",
    tag = "images",
    responses(
        (status = 200, description = "Image URLs", body = Vec<String>),
        (status = 400, description = "Listing failed", body = UploadResult)
    )
)]
pub async fn list_images_handler(
    State(use_case): State<Arc<ListImagesUseCase>>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(use_case.execute().await?))
}
