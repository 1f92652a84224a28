use axum::{extract::State, Json};
use std::sync::Arc;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::LenientJson;
use crate::features::uploads::dtos::{UploadAssetDto, UploadAssetResponseDto};
use crate::features::uploads::services::UploadService;
use crate::shared::types::{ApiResponse, ErrorBody};

/// Upload an asset
///
/// Forwards the file to the media store under the shop's folder and returns
/// the stored asset's metadata.
#[utoipa::path(
    post,
    path = "/.netlify/functions/cloudinary-upload",
    tag = "media",
    request_body = UploadAssetDto,
    responses(
        (status = 200, description = "Asset uploaded (body also carries `success: true`)", body = UploadAssetResponseDto),
        (status = 400, description = "No file provided", body = ErrorBody),
        (status = 405, description = "Method not allowed", body = ErrorBody),
        (status = 500, description = "Upload failed", body = ErrorBody)
    )
)]
pub async fn upload_asset(
    State(service): State<Arc<UploadService>>,
    LenientJson(dto): LenientJson<UploadAssetDto>,
) -> Result<Json<ApiResponse<UploadAssetResponseDto>>> {
    dto.validate()?;

    let response = service.upload(&dto).await?;

    Ok(Json(ApiResponse::success(response)))
}
