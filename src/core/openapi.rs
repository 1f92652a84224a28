use utoipa::OpenApi;

use crate::features::deletions::{dtos as deletions_dtos, handlers as deletions_handlers};
use crate::features::transforms::{dtos as transforms_dtos, handlers as transforms_handlers};
use crate::features::uploads::{dtos as uploads_dtos, handlers as uploads_handlers};
use crate::shared::types::ErrorBody;

#[derive(OpenApi)]
#[openapi(
    paths(
        uploads_handlers::upload_asset,
        deletions_handlers::delete_asset,
        transforms_handlers::transform_asset,
    ),
    components(
        schemas(
            // Shared
            ErrorBody,
            // Uploads
            uploads_dtos::UploadAssetDto,
            uploads_dtos::UploadAssetResponseDto,
            // Deletions
            deletions_dtos::DeleteAssetDto,
            deletions_dtos::DeleteAssetResponseDto,
            // Transforms
            transforms_dtos::TransformAssetDto,
            transforms_dtos::TransformAssetResponseDto,
        )
    ),
    tags(
        (name = "media", description = "Asset upload, deletion and URL transformation"),
    ),
    info(
        title = "Gaming Shop Media API",
        version = "0.1.0",
        description = "Serverless media functions backed by Cloudinary",
    )
)]
pub struct ApiDoc;
