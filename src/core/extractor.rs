use axum::{
    body::{Body, Bytes},
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::core::error::{AppError, Operation};

/// Request payloads name the handler they belong to, so body failures carry its label
pub trait OperationPayload {
    const OPERATION: Operation;
}

/// JSON body extractor that ignores `Content-Type`
///
/// Any failure to read or decode the body (empty, truncated, wrong shape)
/// becomes [`AppError::MalformedInput`] for the payload's operation.
pub struct LenientJson<T>(pub T);

impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + OperationPayload,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::MalformedInput {
                operation: T::OPERATION,
                message: rejection.body_text(),
            })?;

        serde_json::from_slice::<T>(&bytes)
            .map(LenientJson)
            .map_err(|e| AppError::MalformedInput {
                operation: T::OPERATION,
                message: e.to_string(),
            })
    }
}
