//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the client for the Cloudinary media store.

pub mod cloudinary;
