use crate::domain::{
    requests::dashboard::{ReportQuery, StatsScope},
    response::relay::Relay,
};
use async_trait::async_trait;
use shared::errors::GatewayError;
use std::sync::Arc;

pub type DynDashboardProxy = Arc<dyn DashboardProxyTrait + Send + Sync>;

#[async_trait]
pub trait DashboardProxyTrait {
    async fn stats(&self, token: &str, scope: StatsScope) -> Result<Relay, GatewayError>;
    async fn activities(&self, token: &str) -> Result<Relay, GatewayError>;
    async fn report(&self, token: &str, query: &ReportQuery) -> Result<Relay, GatewayError>;
}
