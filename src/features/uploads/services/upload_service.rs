use std::sync::Arc;
use tracing::info;

use crate::core::error::{AppError, Operation, Result};
use crate::features::uploads::dtos::{
    UploadAssetDto, UploadAssetResponseDto, DEFAULT_UPLOAD_RESOURCE_TYPE, UPLOAD_ROOT_FOLDER,
};
use crate::modules::cloudinary::{AssetStore, UploadOptions};
use crate::shared::validation::is_present;

/// Service for asset uploads
pub struct UploadService {
    store: Arc<dyn AssetStore>,
}

impl UploadService {
    pub fn new(store: Arc<dyn AssetStore>) -> Self {
        Self { store }
    }

    /// Build the store options for a validated upload request
    ///
    /// Folders are namespaced under the shop root; filenames are kept but
    /// made unique and existing assets are never overwritten.
    pub fn upload_options(dto: &UploadAssetDto) -> UploadOptions {
        let folder = match dto.folder.as_deref() {
            Some(folder) if !folder.is_empty() => format!("{}/{}", UPLOAD_ROOT_FOLDER, folder),
            _ => UPLOAD_ROOT_FOLDER.to_string(),
        };

        UploadOptions {
            resource_type: dto
                .resource_type
                .clone()
                .unwrap_or_else(|| DEFAULT_UPLOAD_RESOURCE_TYPE.to_string()),
            folder,
            use_filename: true,
            unique_filename: true,
            overwrite: false,
            transformation: dto.transformation.clone().filter(is_present),
        }
    }

    /// Upload a file to the store and return its canonical metadata
    ///
    /// # Arguments
    /// * `dto` - A request that already passed validation
    pub async fn upload(&self, dto: &UploadAssetDto) -> Result<UploadAssetResponseDto> {
        let file = dto.file.as_deref().unwrap_or_default();
        let options = Self::upload_options(dto);

        let asset = self
            .store
            .upload(file, &options)
            .await
            .map_err(|source| AppError::ExternalService {
                operation: Operation::Upload,
                source,
            })?;

        info!(
            "Asset uploaded: public_id={}, folder={}, format={:?}",
            asset.public_id, options.folder, asset.format
        );

        Ok(UploadAssetResponseDto {
            url: asset.secure_url,
            public_id: asset.public_id,
            width: asset.width,
            height: asset.height,
            format: asset.format,
            bytes: asset.bytes,
            created_at: asset.created_at,
        })
    }
}
