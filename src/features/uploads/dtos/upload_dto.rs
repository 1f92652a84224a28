use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::Operation;
use crate::core::extractor::OperationPayload;
use crate::shared::validation::deserialize_present_text;

pub const NO_FILE_PROVIDED: &str = "No file provided";

/// Root folder every upload lands under
pub const UPLOAD_ROOT_FOLDER: &str = "gaming-shop";

/// Resource type used when the caller does not name one
pub const DEFAULT_UPLOAD_RESOURCE_TYPE: &str = "auto";

/// Request DTO for uploading an asset
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UploadAssetDto {
    /// File payload: data URI, remote URL or base64 string
    #[serde(default, deserialize_with = "deserialize_present_text")]
    #[validate(
        required(message = "No file provided"),
        length(min = 1, message = "No file provided")
    )]
    #[schema(example = "data:image/png;base64,iVBORw0KGgo...")]
    pub file: Option<String>,

    /// Sub-folder under the shop's root folder
    #[serde(default, deserialize_with = "deserialize_present_text")]
    #[schema(example = "weapons")]
    pub folder: Option<String>,

    /// Store resource type (defaults to "auto")
    #[serde(rename = "resourceType", default, deserialize_with = "deserialize_present_text")]
    #[schema(example = "image")]
    pub resource_type: Option<String>,

    /// Incoming transformation descriptor applied before the asset is stored
    #[schema(value_type = Object)]
    pub transformation: Option<Value>,
}

impl OperationPayload for UploadAssetDto {
    const OPERATION: Operation = Operation::Upload;
}

/// Response DTO for a stored asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UploadAssetResponseDto {
    /// HTTPS delivery URL of the stored asset
    pub url: String,
    pub public_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Stored size in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::first_message;
    use serde_json::json;

    fn parse(body: Value) -> UploadAssetDto {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_missing_file_is_rejected() {
        let errors = parse(json!({})).validate().unwrap_err();
        assert_eq!(first_message(&errors), NO_FILE_PROVIDED);
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let errors = parse(json!({ "file": "" })).validate().unwrap_err();
        assert_eq!(first_message(&errors), NO_FILE_PROVIDED);
    }

    #[test]
    fn test_falsy_file_is_rejected() {
        for body in [json!({ "file": false }), json!({ "file": 0 }), json!({ "file": null })] {
            let errors = parse(body).validate().unwrap_err();
            assert_eq!(first_message(&errors), NO_FILE_PROVIDED);
        }
    }

    #[test]
    fn test_scalar_fields_keep_text_form() {
        let dto = parse(json!({ "file": "x", "folder": 2026, "resourceType": false }));
        assert!(dto.validate().is_ok());
        assert_eq!(dto.folder.as_deref(), Some("2026"));
        assert_eq!(dto.resource_type, None);
    }

    #[test]
    fn test_camel_case_resource_type() {
        let dto = parse(json!({ "file": "x", "resourceType": "video" }));
        assert!(dto.validate().is_ok());
        assert_eq!(dto.resource_type.as_deref(), Some("video"));
    }
}
