use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use super::error::CloudinaryError;

/// Options for a single upload call
#[derive(Debug, Clone, PartialEq)]
pub struct UploadOptions {
    /// Store classification: "auto", "image", "video" or "raw"
    pub resource_type: String,
    /// Destination folder (e.g., "gaming-shop/weapons")
    pub folder: String,
    pub use_filename: bool,
    pub unique_filename: bool,
    pub overwrite: bool,
    /// Incoming transformation applied by the store before saving
    pub transformation: Option<Value>,
}

/// Metadata the store reports for a freshly uploaded asset
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadedAsset {
    pub secure_url: String,
    pub public_id: String,
    #[serde(default)]
    pub width: Option<u64>,
    #[serde(default)]
    pub height: Option<u64>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub bytes: Option<u64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Options for a single destroy call
#[derive(Debug, Clone, PartialEq)]
pub struct DestroyOptions {
    pub resource_type: String,
}

/// Outcome the store reports for a destroy call ("ok", "not found", ...)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DestroyOutcome {
    pub result: String,
}

/// The remote asset store operations the handlers depend on
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Upload `file` (data URI, remote URL or base64 payload)
    async fn upload(
        &self,
        file: &str,
        options: &UploadOptions,
    ) -> Result<UploadedAsset, CloudinaryError>;

    /// Remove the asset identified by `public_id`
    async fn destroy(
        &self,
        public_id: &str,
        options: &DestroyOptions,
    ) -> Result<DestroyOutcome, CloudinaryError>;
}
