use crate::domain::{
    requests::user::{UpdateNotificationSettingsRequest, UpdateProfileRequest},
    response::relay::Relay,
};
use async_trait::async_trait;
use shared::errors::GatewayError;
use std::sync::Arc;

pub type DynUserProxy = Arc<dyn UserProxyTrait + Send + Sync>;

#[async_trait]
pub trait UserProxyTrait {
    async fn get_profile(&self, token: &str) -> Result<Relay, GatewayError>;
    async fn update_profile(
        &self,
        token: &str,
        req: &UpdateProfileRequest,
    ) -> Result<Relay, GatewayError>;
    async fn get_notification_settings(&self, token: &str) -> Result<Relay, GatewayError>;
    async fn update_notification_settings(
        &self,
        token: &str,
        req: &UpdateNotificationSettingsRequest,
    ) -> Result<Relay, GatewayError>;
}
