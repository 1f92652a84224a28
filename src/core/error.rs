use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::modules::cloudinary::CloudinaryError;
use crate::shared::types::ErrorBody;
use crate::shared::validation::first_message;

/// The handler an error originated in; picks the 500 label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Upload,
    Delete,
    Transform,
}

impl Operation {
    pub fn failure_label(self) -> &'static str {
        match self {
            Operation::Upload => "Upload failed",
            Operation::Delete => "Delete failed",
            Operation::Transform => "Transform failed",
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{}: {message}", .operation.failure_label())]
    MalformedInput {
        operation: Operation,
        message: String,
    },

    #[error("{}: {source}", .operation.failure_label())]
    ExternalService {
        operation: Operation,
        #[source]
        source: CloudinaryError,
    },

    #[error("Method Not Allowed")]
    MethodNotAllowed { allow: &'static str },
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(first_message(&errors))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(msg) => {
                tracing::warn!("Validation error: {}", msg);
                (StatusCode::BAD_REQUEST, Json(ErrorBody::new(msg))).into_response()
            }
            AppError::MalformedInput { operation, message } => {
                tracing::warn!("Malformed request body: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody::with_message(operation.failure_label(), message)),
                )
                    .into_response()
            }
            AppError::ExternalService { operation, source } => {
                tracing::error!("Cloudinary {:?} error: {:?}", operation, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody::with_message(
                        operation.failure_label(),
                        source.to_string(),
                    )),
                )
                    .into_response()
            }
            AppError::MethodNotAllowed { allow } => (
                StatusCode::METHOD_NOT_ALLOWED,
                [
                    (header::ALLOW, allow),
                    (header::ACCESS_CONTROL_ALLOW_METHODS, allow),
                    (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
                ],
                Json(ErrorBody::new("Method Not Allowed")),
            )
                .into_response(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
