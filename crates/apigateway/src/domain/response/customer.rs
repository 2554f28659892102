use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Customer record as the upstream reports it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// A single entry in a customer's activity feed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActivityResponse {
    pub id: String,
    pub customer_id: String,
    pub kind: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}
