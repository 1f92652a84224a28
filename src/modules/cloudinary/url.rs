use serde_json::Value;

use super::transformation::transformation_string;
use crate::core::config::CloudinaryConfig;
use crate::shared::validation::{ABSOLUTE_URL_REGEX, VERSION_SEGMENT_REGEX};

const DELIVERY_HOST: &str = "res.cloudinary.com";
const RESOURCE_TYPE: &str = "image";
const DELIVERY_TYPE: &str = "upload";

/// Builds delivery URLs for stored assets
///
/// Pure string construction; never touches the network.
#[derive(Debug, Clone)]
pub struct DeliveryUrlBuilder {
    cloud_name: String,
    secure: bool,
}

impl DeliveryUrlBuilder {
    pub fn new(cloud_name: impl Into<String>, secure: bool) -> Self {
        Self {
            cloud_name: cloud_name.into(),
            secure,
        }
    }

    pub fn from_config(config: &CloudinaryConfig) -> Self {
        Self::new(config.cloud_name.clone(), config.secure)
    }

    /// Delivery URL for `public_id`, optionally with a transformation descriptor applied
    ///
    /// # Arguments
    /// * `public_id` - The asset identifier (e.g., "gaming-shop/weapons/sword")
    /// * `transformation` - Descriptor to encode into the URL, if any
    ///
    /// # Returns
    /// `{scheme}://res.cloudinary.com/{cloud}/image/upload/{transformation/}{version/}{public_id}`
    pub fn url(&self, public_id: &str, transformation: Option<&Value>) -> String {
        // Remote URLs are delivered as-is
        if ABSOLUTE_URL_REGEX.is_match(public_id) {
            return public_id.to_string();
        }

        let scheme = if self.secure { "https" } else { "http" };
        let mut segments = vec![
            format!("{}://{}", scheme, DELIVERY_HOST),
            self.cloud_name.clone(),
            RESOURCE_TYPE.to_string(),
            DELIVERY_TYPE.to_string(),
        ];

        if let Some(encoded) = transformation
            .map(transformation_string)
            .filter(|t| !t.is_empty())
        {
            segments.push(encoded);
        }

        // Foldered ids need an explicit version segment to resolve
        if public_id.contains('/') && !VERSION_SEGMENT_REGEX.is_match(public_id) {
            segments.push("v1".to_string());
        }

        segments.push(encode_public_id(public_id));
        segments.join("/")
    }
}

fn encode_public_id(public_id: &str) -> String {
    public_id
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
