use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;

/// An upstream reply handed back to the caller unchanged: the upstream
/// status plus the JSON body exactly as received.
#[derive(Debug, Clone)]
pub struct Relay {
    pub status: StatusCode,
    pub body: Value,
}

impl IntoResponse for Relay {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
