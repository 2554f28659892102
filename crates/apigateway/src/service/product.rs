use crate::{
    abstract_trait::product::ProductProxyTrait,
    domain::{requests::product::FindAllProducts, response::relay::Relay},
    service::UpstreamClient,
};
use async_trait::async_trait;
use shared::errors::GatewayError;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone)]
pub struct ProductProxyService {
    upstream: Arc<UpstreamClient>,
}

impl ProductProxyService {
    pub fn new(upstream: Arc<UpstreamClient>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl ProductProxyTrait for ProductProxyService {
    async fn find_all(&self, token: &str, req: &FindAllProducts) -> Result<Relay, GatewayError> {
        info!(
            "Listing products (page: {}, size: {}, search: {})",
            req.page, req.page_size, req.search
        );

        let query = [
            ("page", req.page.to_string()),
            ("page_size", req.page_size.to_string()),
            ("search", req.search.clone()),
        ];
        self.upstream
            .get_with_query("FindAllProducts", "/products", &query, Some(token))
            .await
    }

    async fn find_by_id(&self, token: &str, id: &str) -> Result<Relay, GatewayError> {
        info!("Fetching product {id}");

        self.upstream
            .get("FindProductById", &format!("/products/{id}"), Some(token))
            .await
    }
}
