use crate::domain::{requests::invoice::FindAllInvoices, response::relay::Relay};
use async_trait::async_trait;
use shared::errors::GatewayError;
use std::sync::Arc;

pub type DynInvoiceProxy = Arc<dyn InvoiceProxyTrait + Send + Sync>;

#[async_trait]
pub trait InvoiceProxyTrait {
    async fn find_all(&self, token: &str, req: &FindAllInvoices) -> Result<Relay, GatewayError>;
    async fn find_by_id(&self, token: &str, id: &str) -> Result<Relay, GatewayError>;
    async fn payments(&self, token: &str, id: &str) -> Result<Relay, GatewayError>;
}
