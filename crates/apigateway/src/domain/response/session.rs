use serde::{Deserialize, Serialize};
use shared::auth::SessionUser;

/// Server-side session record.
///
/// Holds the upstream credential so it never round-trips through the
/// client; only the cache backend ever sees this serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user: SessionUser,
    pub upstream_token: String,
}

/// Upstream credential extracted from the session for the current request.
#[derive(Debug, Clone)]
pub struct UpstreamToken(pub String);
