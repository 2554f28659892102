use crate::{abstract_trait::permission::PermissionProxyTrait, domain::response::relay::Relay};
use crate::service::UpstreamClient;
use async_trait::async_trait;
use shared::errors::GatewayError;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone)]
pub struct PermissionProxyService {
    upstream: Arc<UpstreamClient>,
}

impl PermissionProxyService {
    pub fn new(upstream: Arc<UpstreamClient>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl PermissionProxyTrait for PermissionProxyService {
    async fn find_all(&self, token: &str) -> Result<Relay, GatewayError> {
        info!("Fetching permission catalogue");

        self.upstream
            .get("FindAllPermissions", "/permissions", Some(token))
            .await
    }
}
