use crate::domain::response::relay::Relay;
use async_trait::async_trait;
use shared::errors::GatewayError;
use std::sync::Arc;

pub type DynPermissionProxy = Arc<dyn PermissionProxyTrait + Send + Sync>;

#[async_trait]
pub trait PermissionProxyTrait {
    /// Permission catalogue for the calling session, as the upstream sees it.
    async fn find_all(&self, token: &str) -> Result<Relay, GatewayError>;
}
