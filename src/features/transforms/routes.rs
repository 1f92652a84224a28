use axum::{routing::post, Router};
use std::sync::Arc;

use crate::core::gate::{gate, ALLOW_POST};
use crate::features::transforms::handlers::transform_asset;
use crate::features::transforms::services::TransformService;

pub const TRANSFORM_PATH: &str = "/.netlify/functions/cloudinary-transform";

/// Create routes for the transforms feature
pub fn routes(transform_service: Arc<TransformService>) -> Router {
    Router::new()
        .route(TRANSFORM_PATH, gate(post(transform_asset), ALLOW_POST))
        .with_state(transform_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{test_server, FakeAssetStore};
    use axum::http::{header, Method, StatusCode};
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_transform_success() {
        let store = Arc::new(FakeAssetStore::default());
        let server = test_server(store.clone());

        let response = server
            .post(TRANSFORM_PATH)
            .json(&json!({ "public_id": "abc", "transformations": [{ "width": 10 }] }))
            .await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");

        let body = response.json::<Value>();
        assert_eq!(body["success"], true);
        assert_eq!(body["public_id"], "abc");
        assert_eq!(body["original_url"], "https://res.cloudinary.com/demo/image/upload/abc");
        assert_eq!(body["transformed_url"], "https://res.cloudinary.com/demo/image/upload/w_10/abc");

        let presets = &body["common_transformations"];
        assert!(presets["thumbnail"]
            .as_str()
            .unwrap()
            .contains("/w_150,h_150,c_fill/q_auto,f_auto/"));
        assert!(presets["medium"].as_str().unwrap().contains("/w_500,h_500,c_limit/q_auto,f_auto/"));
        assert!(presets["large"].as_str().unwrap().contains("/w_1200,h_1200,c_limit/q_auto,f_auto/"));
        assert!(presets["optimized"].as_str().unwrap().contains("/q_auto,f_auto/f_auto/"));

        // No store traffic for URL building
        assert!(store.uploads().is_empty());
        assert!(store.destroys().is_empty());
    }

    #[tokio::test]
    async fn test_transform_is_byte_identical_across_calls() {
        let server = test_server(Arc::new(FakeAssetStore::default()));
        let body = json!({ "public_id": "gaming-shop/armor/helm", "transformations": { "angle": 90 } });

        let first = server.post(TRANSFORM_PATH).json(&body).await.text();
        let second = server.post(TRANSFORM_PATH).json(&body).await.text();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_transform_requires_both_fields() {
        let server = test_server(Arc::new(FakeAssetStore::default()));

        for body in [
            json!({ "public_id": "abc" }),
            json!({ "transformations": [{ "width": 10 }] }),
            json!({ "public_id": false, "transformations": [{ "width": 10 }] }),
            json!({ "public_id": 0, "transformations": [{ "width": 10 }] }),
        ] {
            let response = server.post(TRANSFORM_PATH).json(&body).await;
            response.assert_status(StatusCode::BAD_REQUEST);
            response.assert_json(&json!({ "error": "public_id and transformations are required" }));
        }
    }

    #[tokio::test]
    async fn test_transform_malformed_body() {
        let server = test_server(Arc::new(FakeAssetStore::default()));

        let response = server.post(TRANSFORM_PATH).text("").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.json::<Value>()["error"], "Transform failed");
    }

    #[tokio::test]
    async fn test_transform_preflight_and_wrong_method() {
        let server = test_server(Arc::new(FakeAssetStore::default()));

        let preflight = server.method(Method::OPTIONS, TRANSFORM_PATH).await;
        preflight.assert_status(StatusCode::OK);
        assert_eq!(preflight.text(), "");
        assert_eq!(preflight.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");

        let response = server.delete(TRANSFORM_PATH).await;
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        response.assert_json(&json!({ "error": "Method Not Allowed" }));
        assert_eq!(response.header(header::ALLOW), "POST, OPTIONS");
        assert_eq!(response.header(header::ACCESS_CONTROL_ALLOW_METHODS), "POST, OPTIONS");
    }
}
