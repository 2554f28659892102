use serde::{Deserialize, Serialize};
use shared::auth::SessionUser;
use utoipa::ToSchema;

/// Payload the upstream returns on a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginData {
    pub token: String,
    pub user: SessionUser,
}

/// Reply handed to the client: the gateway's own access token plus the
/// authenticated identity. The upstream credential stays server-side.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
    pub user: SessionUser,
}
