use crate::domain::{
    requests::customer::{FindAllCustomers, RestoreCustomersRequest},
    response::relay::Relay,
};
use async_trait::async_trait;
use shared::errors::GatewayError;
use std::sync::Arc;

pub type DynCustomerProxy = Arc<dyn CustomerProxyTrait + Send + Sync>;

#[async_trait]
pub trait CustomerProxyTrait {
    async fn find_all(&self, token: &str, req: &FindAllCustomers) -> Result<Relay, GatewayError>;
    async fn find_by_id(&self, token: &str, id: &str) -> Result<Relay, GatewayError>;
    async fn activities(&self, token: &str, id: &str) -> Result<Relay, GatewayError>;
    async fn restore(
        &self,
        token: &str,
        req: &RestoreCustomersRequest,
    ) -> Result<Relay, GatewayError>;
}
