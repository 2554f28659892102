use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform client-facing error body: `{ "success": false, "message": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
