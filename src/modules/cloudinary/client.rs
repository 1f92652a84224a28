//! Signed calls against the Cloudinary upload API

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::error::CloudinaryError;
use super::signature::{sign_params, SignatureAlgorithm};
use super::store::{AssetStore, DestroyOptions, DestroyOutcome, UploadOptions, UploadedAsset};
use super::transformation::transformation_string;
use crate::core::config::CloudinaryConfig;

/// Error envelope returned by the upload API on non-2xx replies
#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Cloudinary upload API client
pub struct CloudinaryClient {
    config: CloudinaryConfig,
    http_client: Client,
}

impl CloudinaryClient {
    /// Create a new client from configuration
    pub fn new(config: CloudinaryConfig) -> Result<Self, CloudinaryError> {
        let http_client = Client::builder()
            .user_agent(concat!("gaming-shop-media/", env!("CARGO_PKG_VERSION")))
            .build()?;

        info!(
            "Cloudinary client initialized for cloud: {}, api: {}, signature: {}",
            config.cloud_name, config.api_base_url, config.signature_algorithm
        );

        Ok(Self {
            config,
            http_client,
        })
    }

    /// `{api_base}/{cloud_name}/{resource_type}/{action}`
    fn endpoint(&self, resource_type: &str, action: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.config.api_base_url, self.config.cloud_name, resource_type, action
        )
    }

    /// Add timestamp, api key and signature to the request params
    fn sign<'a>(&self, mut params: Vec<(&'a str, String)>) -> Vec<(&'a str, String)> {
        params.push(("timestamp", Utc::now().timestamp().to_string()));

        let signature = sign_params(
            &params,
            &self.config.api_secret,
            self.config.signature_algorithm,
        );

        params.push(("api_key", self.config.api_key.clone()));
        params.push(("signature", signature));
        if self.config.signature_algorithm != SignatureAlgorithm::Sha1 {
            params.push((
                "signature_algorithm",
                self.config.signature_algorithm.as_str().to_string(),
            ));
        }
        params
    }

    /// POST form-encoded params and decode the JSON reply
    async fn post_form<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T, CloudinaryError> {
        let response = self.http_client.post(url).form(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = api_error_message(status, &body);
            warn!("Cloudinary API returned {}: {}", status, message);
            return Err(CloudinaryError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response.json::<T>().await.map_err(|e| {
            CloudinaryError::InvalidResponse(format!("Failed to decode Cloudinary response: {}", e))
        })
    }
}

/// Pull the API's own message out of an error reply, falling back to the status text
fn api_error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ApiErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .map(|reason| format!("{} {}", status.as_u16(), reason))
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
        })
}

#[async_trait]
impl AssetStore for CloudinaryClient {
    async fn upload(
        &self,
        file: &str,
        options: &UploadOptions,
    ) -> Result<UploadedAsset, CloudinaryError> {
        let mut params = vec![
            ("folder", options.folder.clone()),
            ("use_filename", options.use_filename.to_string()),
            ("unique_filename", options.unique_filename.to_string()),
            ("overwrite", options.overwrite.to_string()),
        ];
        if let Some(descriptor) = &options.transformation {
            let encoded = transformation_string(descriptor);
            if !encoded.is_empty() {
                params.push(("transformation", encoded));
            }
        }

        let mut params = self.sign(params);
        params.push(("file", file.to_string()));

        let url = self.endpoint(&options.resource_type, "upload");
        debug!(
            "Uploading to '{}' (folder: {}, resource_type: {})",
            url, options.folder, options.resource_type
        );

        let asset: UploadedAsset = self.post_form(&url, &params).await?;

        info!(
            "Uploaded asset '{}' ({} bytes)",
            asset.public_id,
            asset.bytes.unwrap_or_default()
        );
        Ok(asset)
    }

    async fn destroy(
        &self,
        public_id: &str,
        options: &DestroyOptions,
    ) -> Result<DestroyOutcome, CloudinaryError> {
        let params = self.sign(vec![("public_id", public_id.to_string())]);

        let url = self.endpoint(&options.resource_type, "destroy");
        debug!("Destroying '{}' via '{}'", public_id, url);

        let outcome: DestroyOutcome = self.post_form(&url, &params).await?;

        info!("Destroy '{}' returned '{}'", public_id, outcome.result);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Form, State},
        http::StatusCode as AxumStatus,
        routing::post,
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    type Captured = Arc<Mutex<Vec<HashMap<String, String>>>>;

    fn config(api_base_url: String, algorithm: SignatureAlgorithm) -> CloudinaryConfig {
        CloudinaryConfig {
            cloud_name: "demo".to_string(),
            api_key: "123456".to_string(),
            api_secret: "shh".to_string(),
            secure: true,
            api_base_url,
            signature_algorithm: algorithm,
        }
    }

    async fn capture_upload(
        State(captured): State<Captured>,
        Form(form): Form<HashMap<String, String>>,
    ) -> Json<Value> {
        captured.lock().unwrap().push(form);
        Json(json!({
            "public_id": "gaming-shop/weapons/sword_x1y2",
            "secure_url": "https://res.cloudinary.com/demo/image/upload/v1/gaming-shop/weapons/sword_x1y2.png",
            "width": 640,
            "height": 480,
            "format": "png",
            "bytes": 2048,
            "created_at": "2026-10-16T10:00:00Z",
            "etag": "ignored"
        }))
    }

    async fn capture_destroy(
        State(captured): State<Captured>,
        Form(form): Form<HashMap<String, String>>,
    ) -> Json<Value> {
        captured.lock().unwrap().push(form);
        Json(json!({ "result": "not found" }))
    }

    async fn reject() -> (AxumStatus, Json<Value>) {
        (
            AxumStatus::BAD_REQUEST,
            Json(json!({ "error": { "message": "Invalid image file" } })),
        )
    }

    /// Serve a stand-in upload API on an ephemeral port
    async fn spawn_api(captured: Captured) -> String {
        let app = Router::new()
            .route("/demo/image/upload", post(capture_upload))
            .route("/demo/video/destroy", post(capture_destroy))
            .route("/demo/raw/upload", post(reject))
            .with_state(captured);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn upload_options(resource_type: &str) -> UploadOptions {
        UploadOptions {
            resource_type: resource_type.to_string(),
            folder: "gaming-shop/weapons".to_string(),
            use_filename: true,
            unique_filename: true,
            overwrite: false,
            transformation: Some(json!([{ "width": 800, "crop": "limit" }])),
        }
    }

    #[tokio::test]
    async fn test_upload_sends_signed_form() {
        let captured = Captured::default();
        let base = spawn_api(captured.clone()).await;
        let client = CloudinaryClient::new(config(base, SignatureAlgorithm::Sha1)).unwrap();

        let asset = client
            .upload("data:image/png;base64,AAAA", &upload_options("image"))
            .await
            .unwrap();

        assert_eq!(asset.public_id, "gaming-shop/weapons/sword_x1y2");
        assert_eq!(asset.width, Some(640));
        assert_eq!(asset.bytes, Some(2048));

        let forms = captured.lock().unwrap();
        let form = &forms[0];
        assert_eq!(form["file"], "data:image/png;base64,AAAA");
        assert_eq!(form["folder"], "gaming-shop/weapons");
        assert_eq!(form["use_filename"], "true");
        assert_eq!(form["unique_filename"], "true");
        assert_eq!(form["overwrite"], "false");
        assert_eq!(form["transformation"], "w_800,c_limit");
        assert_eq!(form["api_key"], "123456");
        assert!(!form.contains_key("signature_algorithm"));

        let signed: Vec<(&str, String)> = form
            .iter()
            .map(|(k, v)| (k.as_str(), v.clone()))
            .collect();
        assert_eq!(
            form["signature"],
            sign_params(&signed, "shh", SignatureAlgorithm::Sha1)
        );
    }

    #[tokio::test]
    async fn test_destroy_with_sha256_signature() {
        let captured = Captured::default();
        let base = spawn_api(captured.clone()).await;
        let client = CloudinaryClient::new(config(base, SignatureAlgorithm::Sha256)).unwrap();

        let outcome = client
            .destroy(
                "gaming-shop/old",
                &DestroyOptions {
                    resource_type: "video".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(outcome.result, "not found");

        let forms = captured.lock().unwrap();
        let form = &forms[0];
        assert_eq!(form["public_id"], "gaming-shop/old");
        assert_eq!(form["signature_algorithm"], "sha256");
        assert_eq!(form["signature"].len(), 64);
    }

    #[tokio::test]
    async fn test_api_error_message_is_preserved() {
        let base = spawn_api(Captured::default()).await;
        let client = CloudinaryClient::new(config(base, SignatureAlgorithm::Sha1)).unwrap();

        let err = client
            .upload("not-a-file", &upload_options("raw"))
            .await
            .unwrap_err();

        assert!(matches!(err, CloudinaryError::Api { status: 400, .. }));
        assert_eq!(err.to_string(), "Invalid image file");
    }

    #[tokio::test]
    async fn test_unknown_route_falls_back_to_status_text() {
        let base = spawn_api(Captured::default()).await;
        let client = CloudinaryClient::new(config(base, SignatureAlgorithm::Sha1)).unwrap();

        let err = client
            .destroy(
                "abc",
                &DestroyOptions {
                    resource_type: "image".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "404 Not Found");
    }

    #[test]
    fn test_api_error_message_parsing() {
        assert_eq!(
            api_error_message(StatusCode::UNAUTHORIZED, r#"{"error":{"message":"Invalid Signature"}}"#),
            "Invalid Signature"
        );
        assert_eq!(
            api_error_message(StatusCode::BAD_GATEWAY, "<html>"),
            "502 Bad Gateway"
        );
    }
}
