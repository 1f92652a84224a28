use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::MethodRouter,
};

use crate::core::error::AppError;

/// `Allow` value for handlers that only accept POST
pub const ALLOW_POST: &str = "POST, OPTIONS";

/// `Allow` value for handlers that only accept DELETE
pub const ALLOW_DELETE: &str = "DELETE, OPTIONS";

/// Preflight reply: 200, empty body, allowed methods and headers advertised
pub fn preflight_response(allow: &'static str) -> Response {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_METHODS, allow),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
        .into_response()
}

/// Wrap a single-method route with the shared request gate
///
/// OPTIONS answers the preflight without running the handler; every other
/// method the route does not serve is rejected with 405.
pub fn gate<S>(route: MethodRouter<S>, allow: &'static str) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    route
        .options(move || async move { preflight_response(allow) })
        .fallback(move || async move { AppError::MethodNotAllowed { allow } })
}
