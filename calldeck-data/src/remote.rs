//! Response shapes owned by the external aggregation endpoint
//!
//! Every nested field is optional: the collaborator returns partial
//! payloads, and absence must render as a placeholder rather than fail
//! deserialization.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Summary response from `/{locationId}/voice-ai/dashboard/agents`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryResponse {
    #[serde(default)]
    pub data: Option<SummaryData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryData {
    #[serde(default)]
    pub current: Option<SummaryWindow>,
}

/// Aggregates for the current time window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryWindow {
    #[serde(default)]
    pub total_calls: Option<u64>,
    #[serde(default)]
    pub actions_triggered: Option<u64>,
    #[serde(default)]
    pub positive_sentiment_call_count: Option<u64>,
    #[serde(default)]
    pub negative_sentiment_call_count: Option<u64>,
}

impl SummaryResponse {
    /// The nested `data.current` window, if the endpoint returned one.
    pub fn current(&self) -> Option<&SummaryWindow> {
        self.data.as_ref().and_then(|d| d.current.as_ref())
    }
}

/// Call-log response from `/{locationId}/voice-ai/dashboard/call-logs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallLogsResponse {
    #[serde(default)]
    pub data: Option<CallLogsData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallLogsData {
    #[serde(default)]
    pub call_logs: Vec<CallLogRecord>,
}

impl CallLogsResponse {
    pub fn into_records(self) -> Vec<CallLogRecord> {
        self.data.map(|d| d.call_logs).unwrap_or_default()
    }
}

/// A single call-log entry. All fields are individually optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallLogRecord {
    #[serde(default)]
    pub agent_name: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub from_number: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(default)]
    pub executed_call_actions: Vec<ExecutedAction>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub transcript: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutedAction {
    #[serde(default)]
    pub action_name: Option<String>,
}

/// Display-ready projection of a [`CallLogRecord`] with placeholders
/// substituted for absent fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallLogRow {
    pub agent_name: String,
    pub agent_initials: String,
    pub contact_name: String,
    pub contact_initials: String,
    pub from_number: String,
    /// "d Mon yyyy", or "-" when absent or unparseable.
    pub date: String,
    /// "h:mm AM/PM", or "-" when absent or unparseable.
    pub time: String,
    /// "MM:SS", absent duration treated as zero.
    pub duration: String,
    /// Executed action names joined with ", ", or "-" when none.
    pub actions: String,
    pub summary: String,
    pub transcript: String,
}

impl CallLogRow {
    pub fn from_record(record: &CallLogRecord) -> Self {
        let (date, time) = match record.created_at.as_deref() {
            Some(raw) => match DateTime::parse_from_rfc3339(raw) {
                Ok(parsed) => (
                    parsed.format("%-d %b %Y").to_string(),
                    parsed.format("%-I:%M %p").to_string(),
                ),
                Err(_) => ("-".into(), "-".into()),
            },
            None => ("-".into(), "-".into()),
        };

        let actions: Vec<&str> = record
            .executed_call_actions
            .iter()
            .filter_map(|a| a.action_name.as_deref())
            .collect();

        CallLogRow {
            agent_name: record.agent_name.clone().unwrap_or_else(|| "-".into()),
            agent_initials: initials(record.agent_name.as_deref()),
            contact_name: record.contact_name.clone().unwrap_or_else(|| "-".into()),
            contact_initials: initials(record.contact_name.as_deref()),
            from_number: record.from_number.clone().unwrap_or_else(|| "-".into()),
            date,
            time,
            duration: format_duration(record.duration.unwrap_or(0)),
            actions: if actions.is_empty() {
                "-".into()
            } else {
                actions.join(", ")
            },
            summary: record
                .summary
                .clone()
                .unwrap_or_else(|| "No summary available".into()),
            transcript: record
                .transcript
                .clone()
                .unwrap_or_else(|| "No transcript available".into()),
        }
    }
}

/// First character of each whitespace-separated word; "NA" for an absent
/// or empty name.
fn initials(name: Option<&str>) -> String {
    let joined: String = name
        .unwrap_or_default()
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect();
    if joined.is_empty() {
        "NA".into()
    } else {
        joined
    }
}

/// Whole seconds formatted as zero-padded MM:SS.
pub fn format_duration(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
