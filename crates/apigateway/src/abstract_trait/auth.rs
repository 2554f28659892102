use crate::domain::{requests::auth::LoginRequest, response::auth::LoginData};
use async_trait::async_trait;
use shared::errors::GatewayError;
use std::sync::Arc;

pub type DynAuthProxy = Arc<dyn AuthProxyTrait + Send + Sync>;

/// Login is the one proxied call with a typed reply: the gateway has to
/// take the upstream credential and identity apart to build the session.
#[async_trait]
pub trait AuthProxyTrait {
    async fn login(&self, req: &LoginRequest) -> Result<LoginData, GatewayError>;
}
