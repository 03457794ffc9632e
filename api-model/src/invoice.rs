use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Pending,
    Processing,
    Paid,
    Canceled,
    Refunded,
    #[serde(other)]
    Other,
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", serde_variant::to_variant_name(self).unwrap())
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    pub id: String,
    pub contract_id: Option<String>,
    /// Decimal amount as sent by the server, e.g. `"1250.00"`.
    pub amount: Option<String>,
    pub currency: Option<String>,
    pub status: Option<InvoiceStatus>,
    pub issued_at: Option<DateTime<Utc>>,
}
