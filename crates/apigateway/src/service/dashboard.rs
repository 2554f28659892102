use crate::{
    abstract_trait::dashboard::DashboardProxyTrait,
    domain::{
        requests::dashboard::{ReportQuery, StatsScope},
        response::relay::Relay,
    },
    service::UpstreamClient,
};
use async_trait::async_trait;
use shared::errors::GatewayError;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone)]
pub struct DashboardProxyService {
    upstream: Arc<UpstreamClient>,
}

impl DashboardProxyService {
    pub fn new(upstream: Arc<UpstreamClient>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl DashboardProxyTrait for DashboardProxyService {
    async fn stats(&self, token: &str, scope: StatsScope) -> Result<Relay, GatewayError> {
        info!("Fetching dashboard stats ({scope:?})");

        match scope {
            StatsScope::Full => {
                self.upstream
                    .get("GetDashboardStats", "/dashboard/stats", Some(token))
                    .await
            }
            StatsScope::Summary => {
                let query = [("scope", "summary".to_string())];
                self.upstream
                    .get_with_query("GetDashboardStats", "/dashboard/stats", &query, Some(token))
                    .await
            }
        }
    }

    async fn activities(&self, token: &str) -> Result<Relay, GatewayError> {
        info!("Fetching dashboard activity feed");

        self.upstream
            .get("GetDashboardActivities", "/dashboard/activities", Some(token))
            .await
    }

    async fn report(&self, token: &str, query: &ReportQuery) -> Result<Relay, GatewayError> {
        info!("Fetching report (granularity: {})", query.granularity);

        let mut params = vec![("granularity", query.granularity.clone())];
        if let Some(from) = &query.from {
            params.push(("from", from.clone()));
        }
        if let Some(to) = &query.to {
            params.push(("to", to.clone()));
        }

        self.upstream
            .get_with_query("GetReport", "/reports", &params, Some(token))
            .await
    }
}
