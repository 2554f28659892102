use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllInvoices {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,

    #[serde(default)]
    pub search: String,

    /// Optional status filter, relayed verbatim (`draft`, `sent`, `paid`, ...).
    #[serde(default)]
    pub status: Option<String>,
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}
