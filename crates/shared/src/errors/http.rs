use crate::errors::{ErrorResponse, GatewayError, normalize_error};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Handler-level error: authorization outcomes plus anything the proxy path
/// surfaced. Every handler funnels failures through this type so a
/// well-formed JSON error body is produced on every code path.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Internal(String),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, ErrorResponse::new(msg)),
            HttpError::Forbidden(msg) => (StatusCode::FORBIDDEN, ErrorResponse::new(msg)),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::new(msg)),
            HttpError::Gateway(err) => normalize_error(&err),
        };

        (status, Json(body)).into_response()
    }
}
