#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use std::sync::{Arc, Mutex};

#[cfg(test)]
use crate::modules::cloudinary::{
    AssetStore, CloudinaryError, DestroyOptions, DestroyOutcome, UploadOptions, UploadedAsset,
};

/// In-memory stand-in for the asset store that records every call
#[cfg(test)]
#[derive(Default)]
pub struct FakeAssetStore {
    failure: Option<String>,
    uploads: Mutex<Vec<(String, UploadOptions)>>,
    destroys: Mutex<Vec<(String, DestroyOptions)>>,
}

#[cfg(test)]
impl FakeAssetStore {
    pub const SECURE_URL: &'static str =
        "https://res.cloudinary.com/demo/image/upload/v1760600000/gaming-shop/sword_abc123.png";

    /// A store whose every call fails with `message`
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn uploads(&self) -> Vec<(String, UploadOptions)> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn destroys(&self) -> Vec<(String, DestroyOptions)> {
        self.destroys.lock().unwrap().clone()
    }

    fn fail(&self) -> Result<(), CloudinaryError> {
        match &self.failure {
            Some(message) => Err(CloudinaryError::Api {
                status: 400,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl AssetStore for FakeAssetStore {
    async fn upload(
        &self,
        file: &str,
        options: &UploadOptions,
    ) -> Result<UploadedAsset, CloudinaryError> {
        self.uploads
            .lock()
            .unwrap()
            .push((file.to_string(), options.clone()));
        self.fail()?;

        Ok(UploadedAsset {
            secure_url: Self::SECURE_URL.to_string(),
            public_id: format!("{}/sword_abc123", options.folder),
            width: Some(800),
            height: Some(600),
            format: Some("png".to_string()),
            bytes: Some(48213),
            created_at: Some("2026-10-16T08:30:00Z".to_string()),
        })
    }

    async fn destroy(
        &self,
        public_id: &str,
        options: &DestroyOptions,
    ) -> Result<DestroyOutcome, CloudinaryError> {
        self.destroys
            .lock()
            .unwrap()
            .push((public_id.to_string(), options.clone()));
        self.fail()?;

        Ok(DestroyOutcome {
            result: "ok".to_string(),
        })
    }
}

/// Router wired to `store` with the default transform builder for cloud "demo"
#[cfg(test)]
pub fn test_router(store: Arc<FakeAssetStore>) -> axum::Router {
    use crate::core::router::{create_router, Services};
    use crate::features::deletions::DeleteService;
    use crate::features::transforms::TransformService;
    use crate::features::uploads::UploadService;
    use crate::modules::cloudinary::DeliveryUrlBuilder;

    create_router(
        Services {
            upload: Arc::new(UploadService::new(store.clone())),
            delete: Arc::new(DeleteService::new(store)),
            transform: Arc::new(TransformService::new(DeliveryUrlBuilder::new("demo", true))),
        },
        1024 * 1024,
    )
}

#[cfg(test)]
pub fn test_server(store: Arc<FakeAssetStore>) -> axum_test::TestServer {
    axum_test::TestServer::new(test_router(store)).unwrap()
}
