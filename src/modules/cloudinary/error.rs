use thiserror::Error;

/// Failures reported by the Cloudinary upload API or on the way to it.
///
/// `Display` yields the bare failure message, which is surfaced to callers verbatim.
#[derive(Debug, Error)]
pub enum CloudinaryError {
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    InvalidResponse(String),
}
