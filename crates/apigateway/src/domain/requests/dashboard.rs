use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// How much of the stats payload the caller may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsScope {
    Full,
    Summary,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct ReportQuery {
    /// Inclusive start date (`YYYY-MM-DD`), relayed verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    /// Inclusive end date (`YYYY-MM-DD`), relayed verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    #[serde(default = "default_granularity")]
    pub granularity: String,
}

fn default_granularity() -> String {
    "month".to_string()
}
