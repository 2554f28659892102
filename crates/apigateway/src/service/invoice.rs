use crate::{
    abstract_trait::invoice::InvoiceProxyTrait,
    domain::{requests::invoice::FindAllInvoices, response::relay::Relay},
    service::UpstreamClient,
};
use async_trait::async_trait;
use shared::errors::GatewayError;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone)]
pub struct InvoiceProxyService {
    upstream: Arc<UpstreamClient>,
}

impl InvoiceProxyService {
    pub fn new(upstream: Arc<UpstreamClient>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl InvoiceProxyTrait for InvoiceProxyService {
    async fn find_all(&self, token: &str, req: &FindAllInvoices) -> Result<Relay, GatewayError> {
        info!(
            "Listing invoices (page: {}, size: {}, search: {})",
            req.page, req.page_size, req.search
        );

        let mut query = vec![
            ("page", req.page.to_string()),
            ("page_size", req.page_size.to_string()),
            ("search", req.search.clone()),
        ];
        if let Some(status) = &req.status {
            query.push(("status", status.clone()));
        }

        self.upstream
            .get_with_query("FindAllInvoices", "/invoices", &query, Some(token))
            .await
    }

    async fn find_by_id(&self, token: &str, id: &str) -> Result<Relay, GatewayError> {
        info!("Fetching invoice {id}");

        self.upstream
            .get("FindInvoiceById", &format!("/invoices/{id}"), Some(token))
            .await
    }

    async fn payments(&self, token: &str, id: &str) -> Result<Relay, GatewayError> {
        info!("Fetching payments for invoice {id}");

        self.upstream
            .get(
                "FindInvoicePayments",
                &format!("/invoices/{id}/payments/"),
                Some(token),
            )
            .await
    }
}
