use chrono::{DateTime, Utc};
use colored::Colorize;
use deel_api_model::{
    ContractStatus,
    HiringStatus,
    InvoiceStatus,
    TimesheetStatus,
};
use serde::Serialize;

pub trait FancyToString {
    fn fancy(&self) -> String;
}

/// Convenience to enable fancy() on Option<T>
impl<T> FancyToString for Option<T>
where
    T: FancyToString,
{
    fn fancy(&self) -> String {
        match self {
            | Some(t) => t.fancy(),
            | None => "".to_string(),
        }
    }
}

impl FancyToString for http::StatusCode {
    fn fancy(&self) -> String {
        if self.is_success() {
            self.to_string().green().to_string()
        } else if self.is_client_error() {
            self.to_string().yellow().to_string()
        } else {
            self.to_string().red().to_string()
        }
    }
}

impl FancyToString for ContractStatus {
    fn fancy(&self) -> String {
        match self {
            | ContractStatus::InProgress => {
                format!("{}{}", emoji("🟢"), self.to_string().green())
            }
            | ContractStatus::New
            | ContractStatus::UnderReview
            | ContractStatus::WaitingForClientSign
            | ContractStatus::WaitingForContractorSign
            | ContractStatus::WaitingForEmployeeSign => {
                format!("{}{}", emoji("⏳"), self.to_string().yellow())
            }
            | ContractStatus::Completed => {
                format!("{}{}", emoji("✔️"), self.to_string().italic())
            }
            | ContractStatus::Cancelled => format!("{}{self}", emoji("✖️")),
            | s => s.to_string(),
        }
    }
}

impl FancyToString for HiringStatus {
    fn fancy(&self) -> String {
        match self {
            | HiringStatus::Active => self.to_string().green().to_string(),
            | HiringStatus::Onboarding => self.to_string().yellow().to_string(),
            | HiringStatus::Inactive | HiringStatus::Offboarding => {
                self.to_string().dimmed().to_string()
            }
            | s => s.to_string(),
        }
    }
}

impl FancyToString for TimesheetStatus {
    fn fancy(&self) -> String {
        match self {
            | TimesheetStatus::Pending => {
                format!("{}{}", emoji("⏳"), self.to_string().yellow())
            }
            | TimesheetStatus::Approved | TimesheetStatus::Paid => {
                format!("{}{}", emoji("✅"), self.to_string().green())
            }
            | TimesheetStatus::Declined => {
                format!("{}{}", emoji("✖️"), self.to_string().red())
            }
            | s => s.to_string(),
        }
    }
}

impl FancyToString for InvoiceStatus {
    fn fancy(&self) -> String {
        match self {
            | InvoiceStatus::Paid => {
                format!("{}{}", emoji("💸"), self.to_string().green())
            }
            | InvoiceStatus::Pending | InvoiceStatus::Processing => {
                self.to_string().yellow().to_string()
            }
            | InvoiceStatus::Canceled | InvoiceStatus::Refunded => {
                self.to_string().dimmed().to_string()
            }
            | s => s.to_string(),
        }
    }
}

fn should_colorize() -> bool {
    colored::control::SHOULD_COLORIZE.should_colorize()
}

/// Respects NO_COLOR environment variable to avoid showing emojis if tty can't
/// display them.
pub fn emoji(s: &str) -> String {
    if should_colorize() {
        format!("{} ", s)
    } else {
        String::new()
    }
}

/// Calendar date of a timestamp, or `-` when the server didn't send one.
pub fn date(value: &Option<DateTime<Utc>>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_owned())
}

/// Pretty JSON, coloured when the terminal supports it.
pub fn json_string<T: Serialize>(value: &T) -> serde_json::Result<String> {
    if should_colorize() {
        colored_json::to_colored_json_auto(&serde_json::to_value(value)?)
    } else {
        serde_json::to_string_pretty(value)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn plain_output_without_colors() {
        colored::control::set_override(false);
        assert_eq!(emoji("🟢"), "");
        assert_eq!(ContractStatus::InProgress.fancy(), "in_progress");
        assert_eq!(None::<TimesheetStatus>.fancy(), "");
        assert_eq!(
            http::StatusCode::NOT_FOUND.fancy(),
            "404 Not Found"
        );
    }

    #[test]
    fn dates_are_calendar_days() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 17, 30, 0).unwrap();
        assert_eq!(date(&Some(ts)), "2024-03-09");
        assert_eq!(date(&None), "-");
    }
}
