use axum::{routing::post, Router};
use std::sync::Arc;

use crate::core::gate::{gate, ALLOW_POST};
use crate::features::uploads::handlers::upload_asset;
use crate::features::uploads::services::UploadService;

pub const UPLOAD_PATH: &str = "/.netlify/functions/cloudinary-upload";

/// Create routes for the uploads feature
pub fn routes(upload_service: Arc<UploadService>) -> Router {
    Router::new()
        .route(UPLOAD_PATH, gate(post(upload_asset), ALLOW_POST))
        .with_state(upload_service)
}
