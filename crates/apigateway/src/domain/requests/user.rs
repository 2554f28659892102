use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Dana Velasquez")]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "dana@example.com")]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateNotificationSettingsRequest {
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub weekly_report: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SetPreferenceRequest {
    #[validate(length(min = 1, max = 4096, message = "Value must be 1-4096 characters"))]
    #[schema(example = "dark")]
    pub value: String,
}
