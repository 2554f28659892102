use crate::errors::AuthError;
use std::sync::Arc;

pub type DynJwtService = Arc<dyn JwtServiceTrait + Send + Sync>;

/// Token issue/verify boundary, kept behind a trait so middleware can be
/// exercised with fakes.
pub trait JwtServiceTrait {
    fn generate_token(&self, user_id: &str, token_type: &str) -> Result<String, AuthError>;

    /// Returns the subject (user id) carried by a valid token of the
    /// expected type.
    fn verify_token(&self, token: &str, expected_type: &str) -> Result<String, AuthError>;
}
