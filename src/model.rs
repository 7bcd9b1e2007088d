use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One day's journal record. `log_date` is the key on the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub log_date: String, // YYYY-MM-DD
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub project: String,
    #[serde(default)]
    pub tasks_completed: Vec<String>,
    #[serde(default)]
    pub tasks_planned: Vec<String>,
    #[serde(default)]
    pub blockers: Vec<String>,
    #[serde(default)]
    pub reflection_well: String,
    #[serde(default)]
    pub reflection_improve: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportResponse {
    pub report: String,
}

/// Whatever the backend answers to `POST /log`. Only the known fields are kept.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SaveAck {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub file: Option<String>,
}

/// Body of a non-2xx backend response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Parses a `YYYY-MM-DD` calendar date, rejecting blanks and impossible days.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}
