use crate::{
    abstract_trait::user::UserProxyTrait,
    domain::{
        requests::user::{UpdateNotificationSettingsRequest, UpdateProfileRequest},
        response::relay::Relay,
    },
    service::UpstreamClient,
};
use async_trait::async_trait;
use shared::errors::GatewayError;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone)]
pub struct UserProxyService {
    upstream: Arc<UpstreamClient>,
}

impl UserProxyService {
    pub fn new(upstream: Arc<UpstreamClient>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl UserProxyTrait for UserProxyService {
    async fn get_profile(&self, token: &str) -> Result<Relay, GatewayError> {
        info!("Fetching user profile");

        self.upstream
            .get("GetUserProfile", "/users/profile", Some(token))
            .await
    }

    async fn update_profile(
        &self,
        token: &str,
        req: &UpdateProfileRequest,
    ) -> Result<Relay, GatewayError> {
        info!("Updating user profile for {}", req.email);

        let body = serde_json::to_value(req).map_err(GatewayError::transport)?;
        self.upstream
            .put("UpdateUserProfile", "/users/profile", &body, Some(token))
            .await
    }

    async fn get_notification_settings(&self, token: &str) -> Result<Relay, GatewayError> {
        info!("Fetching notification settings");

        self.upstream
            .get(
                "GetNotificationSettings",
                "/users/notification-settings",
                Some(token),
            )
            .await
    }

    async fn update_notification_settings(
        &self,
        token: &str,
        req: &UpdateNotificationSettingsRequest,
    ) -> Result<Relay, GatewayError> {
        info!("Updating notification settings");

        let body = serde_json::to_value(req).map_err(GatewayError::transport)?;
        self.upstream
            .put(
                "UpdateNotificationSettings",
                "/users/notification-settings",
                &body,
                Some(token),
            )
            .await
    }
}
