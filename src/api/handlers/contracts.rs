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
use crate::application::use_cases::{ListContractsUseCase, UploadContractUseCase};

/// Multipart body of a contract upload
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ContractUploadForm {
    /// PDF, Word, Excel, PowerPoint or text file, at most 100MB
    #[schema(value_type = String, format = Binary)]
    pub contract_file: Vec<u8>,
}

/// POST /api/contracts
/// Upload a contract; an existing contract with the same name is replaced
#[utoipa::path(
    post,
    path = "/api/contracts",
    tag = "contracts",
    request_body(content = ContractUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Contract stored", body = UploadResult),
        (status = 400, description = "Rejected or failed upload", body = UploadResult)
    )
)]
pub async fn upload_contract_handler(
    State(use_case): State<Arc<UploadContractUseCase>>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResult>, ApiError> {
    let request = extract_upload(&headers, multipart, "contractFile", MediaKind::Document).await?;
    let result = use_case.execute(request).await?;
    Ok(Json(result))
}

/// GET /api/contracts
#[utoipa::path(
    get,
    path = "/api/contracts",
    tag = "contracts",
    responses(
        (status = 200, description = "Contract file names", body = Vec<String>),
        (status = 400, description = "Listing failed", body = UploadResult)
    )
)]
pub async fn list_contracts_handler(
    State(use_case): State<Arc<ListContractsUseCase>>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(use_case.execute().await?))
}
