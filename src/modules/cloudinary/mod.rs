//! Cloudinary media store integration
//!
//! Provides the signed upload API calls (upload, destroy), the pure
//! delivery-URL builder, and the transformation descriptor encoder the
//! two share.

mod client;
mod error;
mod signature;
mod store;
mod transformation;
mod url;

pub use client::CloudinaryClient;
pub use error::CloudinaryError;
pub use signature::{sign_params, SignatureAlgorithm};
pub use store::{AssetStore, DestroyOptions, DestroyOutcome, UploadOptions, UploadedAsset};
pub use transformation::transformation_string;
pub use url::DeliveryUrlBuilder;
