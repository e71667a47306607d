//! Domain types for the Calldeck dashboard

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Result classification of a handled call (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    Appointment,
    Callback,
    NoAnswer,
    Completed,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Appointment => "appointment",
            Outcome::Callback => "callback",
            Outcome::NoAnswer => "no-answer",
            Outcome::Completed => "completed",
        }
    }
}

/// Caller sentiment as classified by the voice agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// A single handled call from the fixture store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallInteraction {
    pub id: String,
    /// Phone-format caller identifier, e.g. "+1234567890".
    pub caller_id: String,
    pub caller_name: String,
    /// ISO 8601 timestamp, no timezone offset.
    pub timestamp: String,
    /// Whole seconds, >= 0.
    pub duration: u64,
    pub outcome: Outcome,
    pub sentiment: Sentiment,
    pub notes: String,
    pub agent_name: String,
}

/// Lifecycle state of an action item. Only pending <-> completed is
/// reachable through the toggle operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionStatus {
    Pending,
    InProgress,
    Completed,
}

impl ActionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionStatus::Pending => "pending",
            ActionStatus::InProgress => "in-progress",
            ActionStatus::Completed => "completed",
        }
    }
}

/// Display priority, ordinal for badge color only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// A follow-up task generated from a call interaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: ActionStatus,
    pub priority: Priority,
    pub created_at: String,
    pub due_date: String,
    pub assigned_to: String,
}

impl ActionItem {
    /// An item is overdue when it is not completed and its due date has
    /// passed. A due date that fails to parse never counts as overdue.
    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        if self.status == ActionStatus::Completed {
            return false;
        }
        match self.due_date.parse::<NaiveDateTime>() {
            Ok(due) => now > due,
            Err(_) => false,
        }
    }
}

/// Billing interval for a catalog capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceInterval {
    Monthly,
    Yearly,
}

/// A subscribable product capability from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capability {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Open string; the catalog filter discovers categories by scanning.
    pub category: String,
    pub price: f64,
    pub price_interval: PriceInterval,
    pub features: Vec<String>,
    /// Gates the subscribe vs. notify affordance.
    pub is_active: bool,
}

/// Baseline dashboard numbers used as fallback when live data is
/// unavailable or still loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_calls_handled: u64,
    pub calls_growth: f64,
    pub appointments_booked: u64,
    pub conversion_rate: f64,
    pub average_response_time: f64,
    pub response_time_improvement: f64,
    pub cost_savings: f64,
    pub cost_reduction: f64,
    pub first_call_resolution: f64,
    pub fcr_growth: f64,
    pub active_action_items: u32,
    pub action_items_pending: u32,
    pub action_items_in_progress: u32,
    pub action_items_resolved: u32,
}

/// One slice of the sentiment pie chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentSlice {
    pub name: String,
    pub value: u32,
    pub color: String,
}

/// One bucket of the call-volume-by-hour chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyVolume {
    pub hour: String,
    pub calls: u32,
}
