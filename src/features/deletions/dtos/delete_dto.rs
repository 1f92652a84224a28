use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::Operation;
use crate::core::extractor::OperationPayload;
use crate::shared::validation::deserialize_present_text;

pub const NO_PUBLIC_ID_PROVIDED: &str = "No public_id provided";

/// Resource type used when the caller does not name one
pub const DEFAULT_DELETE_RESOURCE_TYPE: &str = "image";

/// Request DTO for deleting an asset
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct DeleteAssetDto {
    /// Identifier of the asset to remove
    #[serde(default, deserialize_with = "deserialize_present_text")]
    #[validate(
        required(message = "No public_id provided"),
        length(min = 1, message = "No public_id provided")
    )]
    #[schema(example = "gaming-shop/weapons/sword_abc123")]
    pub public_id: Option<String>,

    /// Store resource type (defaults to "image")
    #[serde(default, deserialize_with = "deserialize_present_text")]
    #[schema(example = "image")]
    pub resource_type: Option<String>,
}

impl OperationPayload for DeleteAssetDto {
    const OPERATION: Operation = Operation::Delete;
}

/// Response DTO for a destroy call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeleteAssetResponseDto {
    /// Outcome reported by the store ("ok", "not found", ...)
    #[schema(example = "ok")]
    pub result: String,
    pub public_id: String,
}
