use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::application::dto::StorageStatsReport;
use crate::application::use_cases::StorageStatsUseCase;

/// GET /api/stats
/// Item counts across every backend, computed on request
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Current counts", body = StorageStatsReport),
        (status = 400, description = "At least one backend failed; body is {error}")
    )
)]
pub async fn storage_stats_handler(
    State(use_case): State<Arc<StorageStatsUseCase>>,
) -> Result<Json<StorageStatsReport>, ApiError> {
    Ok(Json(use_case.execute().await?))
}
