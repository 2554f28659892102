use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Headline numbers for the dashboard. `revenue_cents` is only present in
/// the full-scope variant.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardStatsResponse {
    pub customers_total: i64,
    pub invoices_total: i64,
    pub invoices_overdue: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue_cents: Option<i64>,
}

/// One aggregated reporting row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportDataResponse {
    pub period: String,
    pub revenue_cents: i64,
    pub invoices_issued: i64,
    pub invoices_paid: i64,
}
