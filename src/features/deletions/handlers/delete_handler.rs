use axum::{extract::State, Json};
use std::sync::Arc;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::LenientJson;
use crate::features::deletions::dtos::{DeleteAssetDto, DeleteAssetResponseDto};
use crate::features::deletions::services::DeleteService;
use crate::shared::types::{ApiResponse, ErrorBody};

/// Delete an asset
///
/// The store's outcome string is returned as-is, including "not found".
#[utoipa::path(
    delete,
    path = "/.netlify/functions/cloudinary-delete",
    tag = "media",
    request_body = DeleteAssetDto,
    responses(
        (status = 200, description = "Destroy call completed (body also carries `success: true`)", body = DeleteAssetResponseDto),
        (status = 400, description = "No public_id provided", body = ErrorBody),
        (status = 405, description = "Method not allowed", body = ErrorBody),
        (status = 500, description = "Delete failed", body = ErrorBody)
    )
)]
pub async fn delete_asset(
    State(service): State<Arc<DeleteService>>,
    LenientJson(dto): LenientJson<DeleteAssetDto>,
) -> Result<Json<ApiResponse<DeleteAssetResponseDto>>> {
    dto.validate()?;

    let response = service.delete(&dto).await?;

    Ok(Json(ApiResponse::success(response)))
}
