use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::core::error::Operation;
use crate::core::extractor::OperationPayload;
use crate::shared::validation::{deserialize_present_text, is_present};

pub const PUBLIC_ID_AND_TRANSFORMATIONS_REQUIRED: &str =
    "public_id and transformations are required";

/// Request DTO for computing transformation URLs
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_transform_request"))]
pub struct TransformAssetDto {
    /// Identifier of the asset to render
    #[serde(default, deserialize_with = "deserialize_present_text")]
    #[schema(example = "gaming-shop/weapons/sword_abc123")]
    pub public_id: Option<String>,

    /// Transformation descriptor: an object, a chain (array) of objects, or a named transformation
    #[schema(value_type = Object)]
    pub transformations: Option<Value>,
}

impl OperationPayload for TransformAssetDto {
    const OPERATION: Operation = Operation::Transform;
}

fn validate_transform_request(dto: &TransformAssetDto) -> Result<(), ValidationError> {
    let has_public_id = dto.public_id.as_deref().is_some_and(|id| !id.is_empty());
    let has_transformations = dto.transformations.as_ref().is_some_and(is_present);

    if has_public_id && has_transformations {
        Ok(())
    } else {
        Err(ValidationError::new("required")
            .with_message(Cow::Borrowed(PUBLIC_ID_AND_TRANSFORMATIONS_REQUIRED)))
    }
}

/// Response DTO with every derived delivery URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TransformAssetResponseDto {
    /// URL with no transformation applied
    pub original_url: String,
    /// URL with the caller's descriptor applied
    pub transformed_url: String,
    /// Preset name ("thumbnail", "medium", "large", "optimized") to URL
    #[schema(value_type = Object)]
    pub common_transformations: Map<String, Value>,
    pub public_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::first_message;
    use serde_json::json;

    fn validate(body: Value) -> Result<(), String> {
        let dto: TransformAssetDto = serde_json::from_value(body).unwrap();
        dto.validate().map_err(|e| first_message(&e))
    }

    #[test]
    fn test_requires_both_fields() {
        let missing = Err(PUBLIC_ID_AND_TRANSFORMATIONS_REQUIRED.to_string());
        assert_eq!(validate(json!({})), missing);
        assert_eq!(validate(json!({ "public_id": "abc" })), missing);
        assert_eq!(validate(json!({ "transformations": [{ "width": 10 }] })), missing);
        assert_eq!(validate(json!({ "public_id": "", "transformations": {} })), missing);
        assert_eq!(validate(json!({ "public_id": "abc", "transformations": null })), missing);
        assert_eq!(validate(json!({ "public_id": "abc", "transformations": "" })), missing);
        assert_eq!(validate(json!({ "public_id": false, "transformations": [{ "width": 10 }] })), missing);
        assert_eq!(validate(json!({ "public_id": 0, "transformations": [{ "width": 10 }] })), missing);
    }

    #[test]
    fn test_accepts_any_present_descriptor() {
        assert_eq!(validate(json!({ "public_id": "abc", "transformations": [{ "width": 10 }] })), Ok(()));
        assert_eq!(validate(json!({ "public_id": "abc", "transformations": [] })), Ok(()));
        assert_eq!(validate(json!({ "public_id": "abc", "transformations": "banner" })), Ok(()));
        assert_eq!(validate(json!({ "public_id": 42, "transformations": { "width": 10 } })), Ok(()));
    }
}
