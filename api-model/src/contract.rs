use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "clap", clap(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    New,
    UnderReview,
    WaitingForClientSign,
    WaitingForContractorSign,
    WaitingForEmployeeSign,
    InProgress,
    Completed,
    Cancelled,
    #[serde(other)]
    #[cfg_attr(feature = "clap", value(skip))]
    Other,
}

impl std::fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", serde_variant::to_variant_name(self).unwrap())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "clap", clap(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    OngoingTimeBased,
    PayAsYouGoTimeBased,
    Milestones,
    FixedRate,
    Eor,
    GlobalPayroll,
    #[serde(other)]
    #[cfg_attr(feature = "clap", value(skip))]
    Other,
}

impl std::fmt::Display for ContractType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", serde_variant::to_variant_name(self).unwrap())
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContractWorker {
    pub full_name: Option<String>,
    pub email: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contract {
    pub id: String,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub contract_type: Option<ContractType>,
    pub status: Option<ContractStatus>,
    pub worker: Option<ContractWorker>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Server-side filters accepted by `GET /rest/v2/contracts`.
#[derive(Debug, Clone, Default)]
pub struct ContractsFilter {
    pub statuses: Vec<ContractStatus>,
    pub types: Vec<ContractType>,
}
