use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimesheetStatus {
    Pending,
    Approved,
    Declined,
    NotPayable,
    Paid,
    #[serde(other)]
    Other,
}

impl std::fmt::Display for TimesheetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", serde_variant::to_variant_name(self).unwrap())
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContractRef {
    pub id: String,
    pub title: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Timesheet {
    pub id: String,
    pub contract: Option<ContractRef>,
    pub quantity: Option<f64>,
    pub status: Option<TimesheetStatus>,
    pub description: Option<String>,
    pub date_submitted: Option<DateTime<Utc>>,
}
