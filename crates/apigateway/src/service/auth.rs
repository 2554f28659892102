use crate::{
    abstract_trait::auth::AuthProxyTrait,
    domain::{requests::auth::LoginRequest, response::auth::LoginData},
    service::UpstreamClient,
};
use async_trait::async_trait;
use serde_json::json;
use shared::{domain::responses::ApiEnvelope, errors::GatewayError};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone)]
pub struct AuthProxyService {
    upstream: Arc<UpstreamClient>,
}

impl AuthProxyService {
    pub fn new(upstream: Arc<UpstreamClient>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl AuthProxyTrait for AuthProxyService {
    async fn login(&self, req: &LoginRequest) -> Result<LoginData, GatewayError> {
        info!("Forwarding login for {}", req.email);

        let body = json!({ "email": req.email, "password": req.password });
        let relay = self.upstream.post("Login", "/auth/login", &body, None).await?;

        let envelope: ApiEnvelope<LoginData> =
            serde_json::from_value(relay.body).map_err(GatewayError::transport)?;

        envelope.data.ok_or_else(|| GatewayError::Transport {
            message: Some("upstream login reply carried no session data".to_string()),
        })
    }
}
