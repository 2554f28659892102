use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InvoiceResponse {
    pub id: String,
    pub customer_id: String,
    pub number: String,
    pub amount_cents: i64,
    pub currency: String,
    pub status: String,
    pub due_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentResponse {
    pub id: String,
    pub invoice_id: String,
    pub amount_cents: i64,
    pub method: String,
    pub paid_at: DateTime<Utc>,
}
