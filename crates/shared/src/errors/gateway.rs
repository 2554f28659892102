use crate::errors::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Failure raised while proxying a call to the upstream service.
///
/// `Upstream` carries whatever status and message the upstream answered
/// with; `Transport` covers failures where no upstream response exists:
/// connect errors, timeouts, undecodable bodies.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("upstream responded with status {status}")]
    Upstream {
        status: u16,
        message: Option<String>,
    },

    #[error("transport failure while calling upstream")]
    Transport { message: Option<String> },
}

/// Message used when neither the upstream nor the error itself supplies one.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

impl GatewayError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        GatewayError::Transport {
            message: Some(err.to_string()),
        }
    }
}

/// Collapse a proxy failure into the uniform client envelope and status.
///
/// Resolution order: the upstream status when one exists (500 otherwise),
/// then the upstream message, then the error's own message, then
/// [`INTERNAL_ERROR_MESSAGE`]. Logs the raw error. Infallible.
pub fn normalize_error(err: &GatewayError) -> (StatusCode, ErrorResponse) {
    error!("proxy call failed: {err:?}");

    let (status, message) = match err {
        GatewayError::Upstream { status, message } => {
            let status =
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, message.clone())
        }
        GatewayError::Transport { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
    };

    let message = message.unwrap_or_else(|| INTERNAL_ERROR_MESSAGE.to_string());
    (status, ErrorResponse::new(message))
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, body) = normalize_error(&self);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_default_to_500() {
        let err = GatewayError::transport("connection refused");
        let (status, body) = normalize_error(&err);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, "connection refused");
        assert!(!body.success);
    }

    #[test]
    fn upstream_status_and_message_are_relayed_exactly() {
        let err = GatewayError::Upstream {
            status: 404,
            message: Some("not found".to_string()),
        };
        let (status, body) = normalize_error(&err);
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message, "not found");
    }

    #[test]
    fn missing_messages_fall_back_to_generic() {
        let (_, body) = normalize_error(&GatewayError::Transport { message: None });
        assert_eq!(body.message, INTERNAL_ERROR_MESSAGE);

        let (status, body) = normalize_error(&GatewayError::Upstream {
            status: 502,
            message: None,
        });
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.message, INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn out_of_range_upstream_status_resolves_to_500() {
        let err = GatewayError::Upstream {
            status: 1000,
            message: Some("weird".to_string()),
        };
        let (status, body) = normalize_error(&err);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, "weird");
    }
}
