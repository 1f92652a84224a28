use axum::{routing::delete, Router};
use std::sync::Arc;

use crate::core::gate::{gate, ALLOW_DELETE};
use crate::features::deletions::handlers::delete_asset;
use crate::features::deletions::services::DeleteService;

pub const DELETE_PATH: &str = "/.netlify/functions/cloudinary-delete";

/// Create routes for the deletions feature
pub fn routes(delete_service: Arc<DeleteService>) -> Router {
    Router::new()
        .route(DELETE_PATH, gate(delete(delete_asset), ALLOW_DELETE))
        .with_state(delete_service)
}
