use crate::domain::{requests::product::FindAllProducts, response::relay::Relay};
use async_trait::async_trait;
use shared::errors::GatewayError;
use std::sync::Arc;

pub type DynProductProxy = Arc<dyn ProductProxyTrait + Send + Sync>;

#[async_trait]
pub trait ProductProxyTrait {
    async fn find_all(&self, token: &str, req: &FindAllProducts) -> Result<Relay, GatewayError>;
    async fn find_by_id(&self, token: &str, id: &str) -> Result<Relay, GatewayError>;
}
