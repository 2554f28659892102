use crate::{
    abstract_trait::customer::CustomerProxyTrait,
    domain::{
        requests::customer::{FindAllCustomers, RestoreCustomersRequest},
        response::relay::Relay,
    },
    service::UpstreamClient,
};
use async_trait::async_trait;
use serde_json::json;
use shared::errors::GatewayError;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone)]
pub struct CustomerProxyService {
    upstream: Arc<UpstreamClient>,
}

impl CustomerProxyService {
    pub fn new(upstream: Arc<UpstreamClient>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl CustomerProxyTrait for CustomerProxyService {
    async fn find_all(&self, token: &str, req: &FindAllCustomers) -> Result<Relay, GatewayError> {
        info!(
            "Listing customers (page: {}, size: {}, search: {})",
            req.page, req.page_size, req.search
        );

        let query = [
            ("page", req.page.to_string()),
            ("page_size", req.page_size.to_string()),
            ("search", req.search.clone()),
        ];
        self.upstream
            .get_with_query("FindAllCustomers", "/customers", &query, Some(token))
            .await
    }

    async fn find_by_id(&self, token: &str, id: &str) -> Result<Relay, GatewayError> {
        info!("Fetching customer {id}");

        self.upstream
            .get("FindCustomerById", &format!("/customers/{id}"), Some(token))
            .await
    }

    async fn activities(&self, token: &str, id: &str) -> Result<Relay, GatewayError> {
        info!("Fetching activity feed for customer {id}");

        self.upstream
            .get(
                "FindCustomerActivities",
                &format!("/customers/{id}/activities/"),
                Some(token),
            )
            .await
    }

    async fn restore(
        &self,
        token: &str,
        req: &RestoreCustomersRequest,
    ) -> Result<Relay, GatewayError> {
        info!("Restoring {} customers", req.ids.len());

        self.upstream
            .post(
                "RestoreCustomers",
                "/customers/restore",
                &json!({ "ids": req.ids }),
                Some(token),
            )
            .await
    }
}
