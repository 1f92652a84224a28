use serde_json::{Map, Value};
use tracing::debug;

use crate::features::transforms::dtos::{TransformAssetDto, TransformAssetResponseDto};
use crate::features::transforms::services::PRESETS;
use crate::modules::cloudinary::DeliveryUrlBuilder;

/// Service computing delivery URLs for an asset; performs no I/O
pub struct TransformService {
    urls: DeliveryUrlBuilder,
}

impl TransformService {
    pub fn new(urls: DeliveryUrlBuilder) -> Self {
        Self { urls }
    }

    /// Original, custom and preset URLs for a validated request
    pub fn transform(&self, dto: &TransformAssetDto) -> TransformAssetResponseDto {
        let public_id = dto.public_id.clone().unwrap_or_default();

        let common_transformations: Map<String, Value> = PRESETS
            .iter()
            .map(|preset| {
                let url = self.urls.url(&public_id, Some(&preset.descriptor()));
                (preset.name.to_string(), Value::String(url))
            })
            .collect();

        let transformed_url = self.urls.url(&public_id, dto.transformations.as_ref());
        debug!("Transformed URL for '{}': {}", public_id, transformed_url);

        TransformAssetResponseDto {
            original_url: self.urls.url(&public_id, None),
            transformed_url,
            common_transformations,
            public_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn service() -> TransformService {
        TransformService::new(DeliveryUrlBuilder::new("demo", true))
    }

    fn request(public_id: &str, transformations: Value) -> TransformAssetDto {
        TransformAssetDto {
            public_id: Some(public_id.to_string()),
            transformations: Some(transformations),
        }
    }

    #[test]
    fn test_transform_urls() {
        let response = service().transform(&request("abc", json!([{ "width": 10 }])));

        assert_eq!(
            response.original_url,
            "https://res.cloudinary.com/demo/image/upload/abc"
        );
        assert_eq!(
            response.transformed_url,
            "https://res.cloudinary.com/demo/image/upload/w_10/abc"
        );
        assert_eq!(
            Value::Object(response.common_transformations),
            json!({
                "thumbnail": "https://res.cloudinary.com/demo/image/upload/w_150,h_150,c_fill/q_auto,f_auto/abc",
                "medium": "https://res.cloudinary.com/demo/image/upload/w_500,h_500,c_limit/q_auto,f_auto/abc",
                "large": "https://res.cloudinary.com/demo/image/upload/w_1200,h_1200,c_limit/q_auto,f_auto/abc",
                "optimized": "https://res.cloudinary.com/demo/image/upload/q_auto,f_auto/f_auto/abc"
            })
        );
        assert_eq!(response.public_id, "abc");
    }

    #[test]
    fn test_transform_is_deterministic() {
        let dto = request("gaming-shop/weapons/sword", json!({ "effect": "sepia", "radius": "max" }));
        let first = service().transform(&dto);
        let second = service().transform(&dto);
        assert_eq!(first, second);
        assert_eq!(
            first.transformed_url,
            "https://res.cloudinary.com/demo/image/upload/e_sepia,r_max/v1/gaming-shop/weapons/sword"
        );
    }
}
