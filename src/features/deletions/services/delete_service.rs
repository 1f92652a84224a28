use std::sync::Arc;
use tracing::info;

use crate::core::error::{AppError, Operation, Result};
use crate::features::deletions::dtos::{
    DeleteAssetDto, DeleteAssetResponseDto, DEFAULT_DELETE_RESOURCE_TYPE,
};
use crate::modules::cloudinary::{AssetStore, DestroyOptions};

/// Service for asset deletion
pub struct DeleteService {
    store: Arc<dyn AssetStore>,
}

impl DeleteService {
    pub fn new(store: Arc<dyn AssetStore>) -> Self {
        Self { store }
    }

    /// Destroy an asset and report the store's outcome verbatim
    ///
    /// Existence is not checked first; a missing asset comes back as the
    /// store's own "not found" outcome rather than an error.
    pub async fn delete(&self, dto: &DeleteAssetDto) -> Result<DeleteAssetResponseDto> {
        let public_id = dto.public_id.clone().unwrap_or_default();
        let options = DestroyOptions {
            resource_type: dto
                .resource_type
                .clone()
                .unwrap_or_else(|| DEFAULT_DELETE_RESOURCE_TYPE.to_string()),
        };

        let outcome = self
            .store
            .destroy(&public_id, &options)
            .await
            .map_err(|source| AppError::ExternalService {
                operation: Operation::Delete,
                source,
            })?;

        info!(
            "Asset delete requested: public_id={}, resource_type={}, result={}",
            public_id, options.resource_type, outcome.result
        );

        Ok(DeleteAssetResponseDto {
            result: outcome.result,
            public_id,
        })
    }
}
