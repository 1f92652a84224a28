use axum::{extract::State, Json};
use std::sync::Arc;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::LenientJson;
use crate::features::transforms::dtos::{TransformAssetDto, TransformAssetResponseDto};
use crate::features::transforms::services::TransformService;
use crate::shared::types::{ApiResponse, ErrorBody};

/// Compute transformation URLs for an asset
///
/// Returns the original URL, the URL for the supplied descriptor and the
/// four preset URLs. No call is made to the media store.
#[utoipa::path(
    post,
    path = "/.netlify/functions/cloudinary-transform",
    tag = "media",
    request_body = TransformAssetDto,
    responses(
        (status = 200, description = "URLs computed (body also carries `success: true`)", body = TransformAssetResponseDto),
        (status = 400, description = "public_id and transformations are required", body = ErrorBody),
        (status = 405, description = "Method not allowed", body = ErrorBody),
        (status = 500, description = "Transform failed", body = ErrorBody)
    )
)]
pub async fn transform_asset(
    State(service): State<Arc<TransformService>>,
    LenientJson(dto): LenientJson<TransformAssetDto>,
) -> Result<Json<ApiResponse<TransformAssetResponseDto>>> {
    dto.validate()?;

    Ok(Json(ApiResponse::success(service.transform(&dto))))
}
