use axum::{extract::DefaultBodyLimit, http::StatusCode, routing::get, Json, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;

use crate::core::middleware;
use crate::core::openapi::ApiDoc;
use crate::features::deletions::{routes as deletions_routes, DeleteService};
use crate::features::transforms::{routes as transforms_routes, TransformService};
use crate::features::uploads::{routes as uploads_routes, UploadService};

/// Services shared by the handlers, built once at startup
pub struct Services {
    pub upload: Arc<UploadService>,
    pub delete: Arc<DeleteService>,
    pub transform: Arc<TransformService>,
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Assemble the application router with the shared middleware stack
pub fn create_router(services: Services, max_request_body_size: usize) -> Router {
    Router::new()
        .merge(uploads_routes::routes(services.upload))
        .merge(deletions_routes::routes(services.delete))
        .merge(transforms_routes::routes(services.transform))
        .route("/health", get(health_check))
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(DefaultBodyLimit::max(max_request_body_size))
        .layer(middleware::allow_any_origin())
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}
